//! Type tags for render-gen.
//!
//! `TypeTag` names the semantic type a generator produces values for and the
//! candidate types an attribute declares.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic type identifier shared by attributes and generators.
///
/// # YAML Format
///
/// Tags are plain strings:
/// ```yaml
/// type: string
/// type: integer
/// type: number
/// type: [string, "null"]
/// ```
///
/// Unknown names are preserved as [`TypeTag::Custom`] so callers can register
/// generators for their own domain types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text value
    String,

    /// Whole number
    Integer,

    /// Floating-point number (`number` in JSON schema)
    Float,

    /// Boolean value
    Boolean,

    /// UUID, usually declared through `format: uuid`
    Uuid,

    /// RFC 3339 timestamp, usually declared through `format: date-time`
    DateTime,

    /// Value drawn from an attribute's `enum` list
    Enum,

    /// Explicit null
    Null,

    /// Any other domain type
    Custom(String),
}

impl TypeTag {
    /// Canonical schema name of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Boolean => "boolean",
            Self::Uuid => "uuid",
            Self::DateTime => "date-time",
            Self::Enum => "enum",
            Self::Null => "null",
            Self::Custom(name) => name,
        }
    }

    /// Create a tag for a caller-defined type.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }
}

impl From<&str> for TypeTag {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "string" | "text" => Self::String,
            "integer" | "int" => Self::Integer,
            "number" | "float" => Self::Float,
            "boolean" | "bool" => Self::Boolean,
            "uuid" => Self::Uuid,
            "date-time" | "datetime" | "date_time" => Self::DateTime,
            "enum" => Self::Enum,
            "null" => Self::Null,
            _ => Self::Custom(value.to_string()),
        }
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}
