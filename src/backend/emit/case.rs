//! Emit one test routine per spec case.

use super::literal::{data_literal, string_literal};
use super::preamble::ASSERT_HELPER;
use super::EmitError;
use crate::backend::ident;
use crate::backend::rust_emitter::RustEmitter;
use crate::spec::SpecCase;

/// Extension given to materialized partial files.
pub const PARTIAL_EXTENSION: &str = "mustache";

/// Append the routine for `case` to `out` and return its name.
///
/// Partials are bound to named locals (`_partial_0`, ...) rather than `_`, so each guard lives until
/// the routine returns or unwinds and removes its file then.
pub fn emit_case(out: &mut RustEmitter, scope: &str, case: &SpecCase) -> Result<String, EmitError> {
    let name = ident::routine_name(scope, &case.name);
    let args = [
        string_literal(&case.template),
        string_literal(&case.expected),
        data_literal(&case.data)?,
    ];

    out.attribute("test");
    out.block(&format!("fn {}()", name), |out| {
        if let Some(partials) = &case.partials {
            for (index, (partial, content)) in partials.iter().enumerate() {
                let file = format!("{}.{}", partial, PARTIAL_EXTENSION);
                out.line(&format!(
                    "let _partial_{} = generate_partial({}, {});",
                    index,
                    string_literal(&file),
                    string_literal(content)
                ));
            }
        }
        out.call_statement(ASSERT_HELPER, &args);
    });
    out.blank_line();

    tracing::debug!(routine = %name, data = case.data.kind(), "emitted case");
    Ok(name)
}
