//! Literal encoding for emitted test arguments.
//!
//! Strings go through `proc_macro2::Literal` so escaping always matches Rust's lexer. Case data
//! becomes a tree of plain constructor calls that rebuilds the same value at test time.
//!
//! ## Notes
//!
//! - No macros are emitted for data. A macro such as `serde_json::json!` recurses once per entry
//!   and stops compiling once a mapping grows past a few dozen keys.
//! - Mappings and sequences call the `data_object` / `data_array` helpers from the harness
//!   support code; leaves use `Value` imported there.
//! - Every number carries its width suffix (`u64`, `i64`, `f64`) so no inference is needed.
//! - Mapping keys are written in document order.

use proc_macro2::Literal;

use super::EmitError;
use crate::spec::{DataValue, Number};

/// Support helper that builds a mapping from `[(&str, Value); N]`.
pub const OBJECT_HELPER: &str = "data_object";

/// Support helper that builds a sequence from `[Value; N]`.
pub const ARRAY_HELPER: &str = "data_array";

/// Quote and escape `s` as a Rust string literal.
pub fn string_literal(s: &str) -> String {
    Literal::string(s).to_string()
}

/// Encode a data value as a Rust expression of type `serde_json::Value`.
pub fn data_literal(value: &DataValue) -> Result<String, EmitError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &DataValue) -> Result<(), EmitError> {
    match value {
        DataValue::Null => out.push_str("Value::Null"),
        DataValue::Bool(b) => out.push_str(if *b { "Value::Bool(true)" } else { "Value::Bool(false)" }),
        DataValue::Number(n) => {
            out.push_str("Value::from(");
            write_number(out, *n)?;
            out.push(')');
        }
        DataValue::String(s) => {
            out.push_str("Value::from(");
            out.push_str(&string_literal(s));
            out.push(')');
        }
        DataValue::Sequence(items) => {
            out.push_str(ARRAY_HELPER);
            out.push_str("([");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item)?;
            }
            out.push_str("])");
        }
        DataValue::Mapping(entries) => {
            out.push_str(OBJECT_HELPER);
            out.push_str("([");
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('(');
                out.push_str(&string_literal(key));
                out.push_str(", ");
                write_value(out, item)?;
                out.push(')');
            }
            out.push_str("])");
        }
    }
    Ok(())
}

fn write_number(out: &mut String, n: Number) -> Result<(), EmitError> {
    match n {
        Number::PosInt(u) => out.push_str(&Literal::u64_suffixed(u).to_string()),
        Number::NegInt(i) => {
            if i < 0 {
                out.push('-');
            }
            out.push_str(&Literal::u64_unsuffixed(i.unsigned_abs()).to_string());
            out.push_str("i64");
        }
        Number::Float(f) => {
            if !f.is_finite() {
                return Err(EmitError::Literal(format!("non-finite number {}", f)));
            }
            if f.is_sign_negative() {
                out.push('-');
            }
            out.push_str(&Literal::f64_unsuffixed(f.abs()).to_string());
            out.push_str("f64");
        }
    }
    Ok(())
}
