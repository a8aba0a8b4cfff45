//! Value representation for generated data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// A value produced by a generator.
///
/// `RenderValue` is untagged so it serializes straight to plain JSON/YAML and
/// enum or static literals in schema files deserialize into it directly.
/// Strings always deserialize as [`RenderValue::String`]; the `Uuid` and
/// `DateTime` variants are only produced by generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// Array of values
    Array(Vec<RenderValue>),

    /// Object/map of values
    Object(BTreeMap<String, RenderValue>),

    /// Null value
    Null,
}

impl RenderValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RenderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int64(i) => write!(f, "{i}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Null => f.write_str("null"),
            Self::Array(_) | Self::Object(_) => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for RenderValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RenderValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for RenderValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for RenderValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<bool> for RenderValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
