//! Conversions between raw document values and typed entity fields
//!
//! The API types almost every property value as a string, so inbound coercion
//! is lenient: `"42"` fills an integer field and `"true"` a boolean one. An
//! empty string or `null` leaves a non-text field unset.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde_json::{Number, Value};
use std::fmt;

use crate::document::shape_name;

/// A raw value that does not fit the target field type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// Human-readable name of the expected type
    pub expected: &'static str,
    /// Description of what was found instead
    pub found: String,
}

impl CoercionError {
    fn new(expected: &'static str, value: &Value) -> Self {
        let found = match value {
            Value::String(s) => format!("string {:?}", s),
            Value::Number(n) => format!("number {}", n),
            other => shape_name(other).to_string(),
        };
        Self { expected, found }
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for CoercionError {}

/// A field type that can be filled from, and rendered to, a document value
///
/// `to_wire` returns `None` for absent values; those are never emitted.
pub trait WireValue: Sized {
    fn from_wire(value: &Value) -> Result<Self, CoercionError>;

    fn to_wire(&self) -> Option<Value>;
}

fn blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl WireValue for Option<String> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(CoercionError::new("text", other)),
        }
    }

    fn to_wire(&self) -> Option<Value> {
        self.as_ref().map(|s| Value::String(s.clone()))
    }
}

impl WireValue for Option<i64> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        if blank(value) {
            return Ok(None);
        }
        let parsed = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| CoercionError::new("an integer", value))
    }

    fn to_wire(&self) -> Option<Value> {
        self.map(Value::from)
    }
}

impl WireValue for Option<f64> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        if blank(value) {
            return Ok(None);
        }
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| CoercionError::new("a decimal", value))
    }

    /// NaN and infinities have no JSON form and render as absent
    fn to_wire(&self) -> Option<Value> {
        self.and_then(Number::from_f64).map(Value::Number)
    }
}

impl WireValue for Option<bool> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        if blank(value) {
            return Ok(None);
        }
        match value {
            Value::Bool(b) => Ok(Some(*b)),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(Some(true)),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(Some(false)),
            other => Err(CoercionError::new("a boolean", other)),
        }
    }

    fn to_wire(&self) -> Option<Value> {
        self.map(Value::Bool)
    }
}

/// Timestamps travel as epoch milliseconds; RFC 3339 text is accepted inbound
///
/// Values hold millisecond precision. Finer RFC 3339 fractions are truncated
/// on the way in so a decoded timestamp survives re-encoding unchanged.
impl WireValue for Option<DateTime<Utc>> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        if blank(value) {
            return Ok(None);
        }
        let millis = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let parsed = match millis {
            Some(ms) => Utc.timestamp_millis_opt(ms).single(),
            None => value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
                .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3)),
        };
        parsed
            .map(Some)
            .ok_or_else(|| CoercionError::new("a timestamp", value))
    }

    fn to_wire(&self) -> Option<Value> {
        self.map(|dt| Value::from(dt.timestamp_millis()))
    }
}

/// Properties the model keeps as raw JSON
///
/// They travel as their JSON text. Inbound text that does not parse as JSON is
/// kept as a plain string.
impl WireValue for Option<Value> {
    fn from_wire(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone())),
            )),
            other => Ok(Some(other.clone())),
        }
    }

    fn to_wire(&self) -> Option<Value> {
        self.as_ref().map(|value| Value::String(value.to_string()))
    }
}
