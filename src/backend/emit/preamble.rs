//! Emit the shared harness that precedes all generated routines.
//!
//! The preamble is written once per file:
//!
//! - lint allowances for `Test<Scope><Name>` routine names,
//! - the support code from [`crate::harness::support`], copied verbatim,
//! - `test_spec`, the assertion helper every routine calls, bound to the configured renderer.

use proc_macro2::TokenStream;
use quote::quote;

use super::EmitError;
use crate::backend::rust_emitter::RustEmitter;
use crate::harness::SUPPORT_SOURCE;

/// Name of the assertion helper emitted by [`emit_preamble`].
pub const ASSERT_HELPER: &str = "test_spec";

/// Inner attributes that open every generated file.
const FILE_ALLOWS: &str = "allow(non_snake_case, dead_code)";

/// Write the preamble into `out`.
pub fn emit_preamble(out: &mut RustEmitter, renderer_path: &str) -> Result<(), EmitError> {
    let test_spec = test_spec_tokens(renderer_path)?;

    out.inner_attribute(FILE_ALLOWS);
    out.blank_line();
    out.write(SUPPORT_SOURCE);
    out.blank_line();
    out.line(&test_spec.to_string());
    out.blank_line();
    Ok(())
}

/// Build `test_spec` against `renderer_path`, a function `(&str, &serde_json::Value) -> String`.
fn test_spec_tokens(renderer_path: &str) -> Result<TokenStream, EmitError> {
    let renderer: syn::Path =
        syn::parse_str(renderer_path).map_err(|e| EmitError::Renderer(format!("`{}`: {}", renderer_path, e)))?;

    Ok(quote! {
        fn test_spec(template: &str, expected: &str, context: serde_json::Value) {
            let rendered = #renderer(template, &context);
            let output = convert_html_chars_to_expected_format(&rendered);
            if output != expected {
                panic!("{:?}\nexpected: {:?}\nbut got:  {:?}", template, expected, output);
            }
        }
    })
}
