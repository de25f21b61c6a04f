//! Structured fields attached to log records
//!
//! A [`Field`] is a key plus a typed [`FieldValue`]. Fields keep the order in
//! which they were supplied when a record is encoded.
//!
//! ```
//! use rust_log_facade::field;
//! use std::time::Duration;
//!
//! let fields = [
//!     field::string("id", "001"),
//!     field::int("attempt", 3),
//!     field::duration("elapsed", Duration::from_millis(1500)),
//! ];
//! assert_eq!(fields[0].key(), "id");
//! ```

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Json(serde_json::Value),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Duration(d) => write!(f, "{}", duration_millis(d)),
            FieldValue::Json(v) => write!(f, "{}", v),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for encoding
    ///
    /// Durations become floating-point milliseconds.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Uint(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => float_value(*f),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Duration(d) => float_value(duration_millis(d)),
            FieldValue::Json(v) => v.clone(),
            FieldValue::Null => serde_json::Value::Null,
        }
    }

    /// The string payload, if this value can act as a key
    pub fn as_key(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

fn duration_millis(d: &Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

fn float_value(f: f64) -> serde_json::Value {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Uint(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::Uint(u64::from(u))
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::Uint(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A key with a typed value
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

pub fn string(key: impl Into<String>, value: impl Into<String>) -> Field {
    Field::new(key, FieldValue::String(value.into()))
}

pub fn int(key: impl Into<String>, value: i64) -> Field {
    Field::new(key, FieldValue::Int(value))
}

pub fn uint(key: impl Into<String>, value: u64) -> Field {
    Field::new(key, FieldValue::Uint(value))
}

pub fn float(key: impl Into<String>, value: f64) -> Field {
    Field::new(key, FieldValue::Float(value))
}

pub fn boolean(key: impl Into<String>, value: bool) -> Field {
    Field::new(key, FieldValue::Bool(value))
}

pub fn duration(key: impl Into<String>, value: Duration) -> Field {
    Field::new(key, FieldValue::Duration(value))
}

/// Field holding any serializable value; serialization failures log the error text
pub fn any<T: Serialize>(key: impl Into<String>, value: &T) -> Field {
    let value = match serde_json::to_value(value) {
        Ok(v) => FieldValue::Json(v),
        Err(e) => FieldValue::String(e.to_string()),
    };
    Field::new(key, value)
}

/// Field under the conventional `error` key
pub fn error(err: &dyn std::error::Error) -> Field {
    Field::new("error", FieldValue::String(err.to_string()))
}

/// Encode an ordered field list as a single JSON object
pub(crate) fn fields_to_json(fields: &[Field]) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::with_capacity(fields.len());
    for field in fields {
        map.insert(field.key.clone(), field.value.to_json_value());
    }
    map
}
