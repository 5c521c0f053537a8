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
