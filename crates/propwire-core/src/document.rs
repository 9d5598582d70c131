//! Generic document helpers
//!
//! A document is the schema-less key/value tree produced by the JSON layer.
//! It is represented as an ordered `serde_json::Map` whose values are the
//! tagged `serde_json::Value` variants, so every shape the converter branches
//! on is matched exhaustively.

use serde_json::{Map, Value};

/// Ordered mapping from string key to value
pub type Document = Map<String, Value>;

/// Describe the shape of a value for error messages
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Look up a key, preferring an exact match and falling back to ASCII
/// case-insensitive comparison
pub fn get_ignore_case<'a>(doc: &'a Document, key: &str) -> Option<(&'a str, &'a Value)> {
    if let Some((k, v)) = doc.iter().find(|(k, _)| k.as_str() == key) {
        return Some((k.as_str(), v));
    }
    doc.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(k, v)| (k.as_str(), v))
}

/// Render a value in the uniform textual form the API expects
///
/// Strings are emitted verbatim, everything else as its compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
