//! Untyped case data as a tagged value tree.
//!
//! Spec documents carry arbitrary JSON under `data`. It is converted into [`DataValue`] so the
//! emitter can write every variant back out as a literal without losing its shape, its number
//! kind, or the order of mapping keys.

use indexmap::IndexMap;
use serde::Deserialize;

/// A JSON number, keeping the kind it was parsed as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

/// The data context of a spec case.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum DataValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<DataValue>),
    /// Keys stay in document order.
    Mapping(IndexMap<String, DataValue>),
}

impl DataValue {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "bool",
            DataValue::Number(_) => "number",
            DataValue::String(_) => "string",
            DataValue::Sequence(_) => "sequence",
            DataValue::Mapping(_) => "mapping",
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            Number::PosInt(u)
        } else if let Some(i) = n.as_i64() {
            Number::NegInt(i)
        } else {
            // Without arbitrary_precision every JSON number fits one of the three.
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DataValue::Null,
            serde_json::Value::Bool(b) => DataValue::Bool(b),
            serde_json::Value::Number(n) => DataValue::Number(n.into()),
            serde_json::Value::String(s) => DataValue::String(s),
            serde_json::Value::Array(items) => DataValue::Sequence(items.into_iter().map(DataValue::from).collect()),
            serde_json::Value::Object(map) => {
                DataValue::Mapping(map.into_iter().map(|(k, v)| (k, DataValue::from(v))).collect())
            }
        }
    }
}
