// generated by mustache-specgen --output tests/fixtures/generated/wide_spec_test.rs; DO NOT EDIT

#![allow(non_snake_case, dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use serde_json::{Map, Value};
/// Rewrite the numeric `&#34;` escape to the `&quot;` entity the expected output uses.
///
/// Only this direction is normalized: an expected `&#34;` never matches a rendered `&quot;`.
pub fn convert_html_chars_to_expected_format(s: &str) -> String {
    s.replace("&#34;", "&quot;")
}
/// Build a sequence value from already built items.
pub fn data_array<const N: usize>(items: [Value; N]) -> Value {
    Value::Array(Vec::from(items))
}
/// Build a mapping value, keeping the entries in the order given.
pub fn data_object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_owned(), value);
    }
    Value::Object(map)
}
/// A partial template on disk, removed again when the guard is dropped.
///
/// Dropping happens on every exit from the owning routine, including an assertion panic.
#[derive(Debug)]
pub struct PartialFile {
    path: PathBuf,
}
impl PartialFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl Drop for PartialFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
/// Create (or overwrite) the partial file `name` with `content`.
///
/// A write failure terminates the test process.
pub fn generate_partial(name: impl AsRef<Path>, content: &str) -> PartialFile {
    let path = name.as_ref().to_path_buf();
    if let Err(err) = fs::write(&path, content.as_bytes()) {
        eprintln!("failed to write partial {}: {}", path.display(), err);
        process::exit(1);
    }
    PartialFile { path }
}
fn test_spec(template: &str, expected: &str, context: serde_json::Value) {
    let rendered = crate::render(template, &context);
    let output = convert_html_chars_to_expected_format(&rendered);
    if output != expected {
        panic!("{:?}\nexpected: {:?}\nbut got:  {:?}", template, expected, output);
    }
}
#[test]
fn TestSectionsWideContext() {
    test_spec(
        "No tags here.\n",
        "No tags here.\n",
        data_object([
            ("k00", Value::from("v0")),
            ("k01", Value::from(1000u64)),
            ("k02", Value::Bool(false)),
            ("k03", Value::from(3.5f64)),
            ("k04", Value::Null),
            ("k05", Value::from(-5i64)),
            ("k06", Value::from("v6")),
            ("k07", Value::from(7000u64)),
            ("k08", Value::Bool(true)),
            ("k09", Value::from(9.5f64)),
            ("k10", Value::Null),
            ("k11", Value::from(-11i64)),
            ("k12", Value::from("v12")),
            ("k13", Value::from(13000u64)),
            ("k14", Value::Bool(false)),
            ("k15", Value::from(15.5f64)),
            ("k16", Value::Null),
            ("k17", Value::from(-17i64)),
            ("k18", Value::from("v18")),
            ("k19", Value::from(19000u64)),
            ("k20", Value::Bool(true)),
            ("k21", Value::from(21.5f64)),
            ("k22", Value::Null),
            ("k23", Value::from(-23i64)),
            ("k24", Value::from("v24")),
            ("k25", Value::from(25000u64)),
            ("k26", Value::Bool(false)),
            ("k27", Value::from(27.5f64)),
            ("k28", Value::Null),
            ("k29", Value::from(-29i64)),
            ("k30", Value::from("v30")),
            ("k31", Value::from(31000u64)),
            ("k32", Value::Bool(true)),
            ("k33", Value::from(33.5f64)),
            ("k34", Value::Null),
            ("k35", Value::from(-35i64)),
            ("k36", Value::from("v36")),
            ("k37", Value::from(37000u64)),
            ("k38", Value::Bool(false)),
            ("k39", Value::from(39.5f64)),
            ("k40", Value::Null),
            ("k41", Value::from(-41i64)),
            ("k42", Value::from("v42")),
            ("k43", Value::from(43000u64)),
            ("k44", Value::Bool(true)),
            ("k45", Value::from(45.5f64)),
            ("k46", Value::Null),
            ("k47", Value::from(-47i64)),
            ("k48", Value::from("v48")),
            ("k49", Value::from(49000u64)),
            ("k50", Value::Bool(false)),
            ("k51", Value::from(51.5f64)),
            ("k52", Value::Null),
            ("k53", Value::from(-53i64)),
            ("k54", Value::from("v54")),
            ("k55", Value::from(55000u64)),
            ("k56", Value::Bool(true)),
            ("k57", Value::from(57.5f64)),
            ("k58", Value::Null),
            ("k59", Value::from(-59i64)),
            ("k60", Value::from("v60")),
            ("k61", Value::from(61000u64)),
            ("k62", Value::Bool(false)),
            ("k63", Value::from(63.5f64)),
            ("k64", Value::Null),
            ("k65", Value::from(-65i64)),
            ("k66", Value::from("v66")),
            ("k67", Value::from(67000u64)),
            ("k68", Value::Bool(true)),
            ("k69", Value::from(69.5f64)),
            ("k70", Value::Null),
            ("k71", Value::from(-71i64)),
            ("k72", Value::from("v72")),
            ("k73", Value::from(73000u64)),
            ("k74", Value::Bool(false)),
            ("k75", Value::from(75.5f64)),
            ("k76", Value::Null),
            ("k77", Value::from(-77i64)),
            ("k78", Value::from("v78")),
            ("k79", Value::from(79000u64)),
            (
                "items",
                data_array([
                    Value::from(0u64),
                    Value::from(1u64),
                    Value::from(2u64),
                    Value::from(3u64),
                    Value::from(4u64),
                    Value::from(5u64),
                    Value::from(6u64),
                    Value::from(7u64),
                    Value::from(8u64),
                    Value::from(9u64),
                    Value::from(10u64),
                    Value::from(11u64),
                    Value::from(12u64),
                    Value::from(13u64),
                    Value::from(14u64),
                    Value::from(15u64),
                    Value::from(16u64),
                    Value::from(17u64),
                    Value::from(18u64),
                    Value::from(19u64),
                    Value::from(20u64),
                    Value::from(21u64),
                    Value::from(22u64),
                    Value::from(23u64),
                    Value::from(24u64),
                    Value::from(25u64),
                    Value::from(26u64),
                    Value::from(27u64),
                    Value::from(28u64),
                    Value::from(29u64),
                    Value::from(30u64),
                    Value::from(31u64),
                    Value::from(32u64),
                    Value::from(33u64),
                    Value::from(34u64),
                    Value::from(35u64),
                    Value::from(36u64),
                    Value::from(37u64),
                    Value::from(38u64),
                    Value::from(39u64),
                    Value::from(40u64),
                    Value::from(41u64),
                    Value::from(42u64),
                    Value::from(43u64),
                    Value::from(44u64),
                    Value::from(45u64),
                    Value::from(46u64),
                    Value::from(47u64),
                    Value::from(48u64),
                    Value::from(49u64),
                    Value::from(50u64),
                    Value::from(51u64),
                    Value::from(52u64),
                    Value::from(53u64),
                    Value::from(54u64),
                    Value::from(55u64),
                    Value::from(56u64),
                    Value::from(57u64),
                    Value::from(58u64),
                    Value::from(59u64),
                    Value::from(60u64),
                    Value::from(61u64),
                    Value::from(62u64),
                    Value::from(63u64),
                    Value::from(64u64),
                    Value::from(65u64),
                    Value::from(66u64),
                    Value::from(67u64),
                    Value::from(68u64),
                    Value::from(69u64),
                    Value::from(70u64),
                    Value::from(71u64),
                    Value::from(72u64),
                    Value::from(73u64),
                    Value::from(74u64),
                    Value::from(75u64),
                    Value::from(76u64),
                    Value::from(77u64),
                    Value::from(78u64),
                    Value::from(79u64),
                    Value::from(80u64),
                    Value::from(81u64),
                    Value::from(82u64),
                    Value::from(83u64),
                    Value::from(84u64),
                    Value::from(85u64),
                    Value::from(86u64),
                    Value::from(87u64),
                    Value::from(88u64),
                    Value::from(89u64),
                    Value::from(90u64),
                    Value::from(91u64),
                    Value::from(92u64),
                    Value::from(93u64),
                    Value::from(94u64),
                    Value::from(95u64),
                    Value::from(96u64),
                    Value::from(97u64),
                    Value::from(98u64),
                    Value::from(99u64),
                    Value::from(100u64),
                    Value::from(101u64),
                    Value::from(102u64),
                    Value::from(103u64),
                    Value::from(104u64),
                    Value::from(105u64),
                    Value::from(106u64),
                    Value::from(107u64),
                    Value::from(108u64),
                    Value::from(109u64),
                    Value::from(110u64),
                    Value::from(111u64),
                    Value::from(112u64),
                    Value::from(113u64),
                    Value::from(114u64),
                    Value::from(115u64),
                    Value::from(116u64),
                    Value::from(117u64),
                    Value::from(118u64),
                    Value::from(119u64),
                    Value::from(120u64),
                    Value::from(121u64),
                    Value::from(122u64),
                    Value::from(123u64),
                    Value::from(124u64),
                    Value::from(125u64),
                    Value::from(126u64),
                    Value::from(127u64),
                    Value::from(128u64),
                    Value::from(129u64),
                    Value::from(130u64),
                    Value::from(131u64),
                    Value::from(132u64),
                    Value::from(133u64),
                    Value::from(134u64),
                    Value::from(135u64),
                    Value::from(136u64),
                    Value::from(137u64),
                    Value::from(138u64),
                    Value::from(139u64),
                    Value::from(140u64),
                    Value::from(141u64),
                    Value::from(142u64),
                    Value::from(143u64),
                    Value::from(144u64),
                    Value::from(145u64),
                    Value::from(146u64),
                    Value::from(147u64),
                    Value::from(148u64),
                    Value::from(149u64),
                    Value::from(150u64),
                    Value::from(151u64),
                    Value::from(152u64),
                    Value::from(153u64),
                    Value::from(154u64),
                    Value::from(155u64),
                    Value::from(156u64),
                    Value::from(157u64),
                    Value::from(158u64),
                    Value::from(159u64),
                    Value::from(160u64),
                    Value::from(161u64),
                    Value::from(162u64),
                    Value::from(163u64),
                    Value::from(164u64),
                    Value::from(165u64),
                    Value::from(166u64),
                    Value::from(167u64),
                    Value::from(168u64),
                    Value::from(169u64),
                    Value::from(170u64),
                    Value::from(171u64),
                    Value::from(172u64),
                    Value::from(173u64),
                    Value::from(174u64),
                    Value::from(175u64),
                    Value::from(176u64),
                    Value::from(177u64),
                    Value::from(178u64),
                    Value::from(179u64),
                    Value::from(180u64),
                    Value::from(181u64),
                    Value::from(182u64),
                    Value::from(183u64),
                    Value::from(184u64),
                    Value::from(185u64),
                    Value::from(186u64),
                    Value::from(187u64),
                    Value::from(188u64),
                    Value::from(189u64),
                    Value::from(190u64),
                    Value::from(191u64),
                    Value::from(192u64),
                    Value::from(193u64),
                    Value::from(194u64),
                    Value::from(195u64),
                    Value::from(196u64),
                    Value::from(197u64),
                    Value::from(198u64),
                    Value::from(199u64),
                ]),
            ),
        ]),
    );
}
