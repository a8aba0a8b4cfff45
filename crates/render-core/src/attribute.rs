//! Attribute metadata consumed by generators.
//!
//! An attribute is a named field with one or more candidate types and a set
//! of schema-style constraints. Generators only ever read attributes.

use crate::types::TypeTag;
use crate::values::RenderValue;
use serde::{Deserialize, Deserializer, Serialize};

/// Schema-style constraints attached to an attribute.
///
/// Keys follow JSON schema spelling in YAML (`minLength`, `multipleOf`,
/// `exclusiveMinimum`, ...). Numeric bounds are kept as `f64`; integer
/// generators round them inward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Minimum string length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Lower numeric bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Upper numeric bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Value must be an integer multiple of this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    /// Whether `minimum` itself is excluded
    #[serde(default)]
    pub exclusive_minimum: bool,

    /// Whether `maximum` itself is excluded
    #[serde(default)]
    pub exclusive_maximum: bool,

    /// Allowed literal values
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<RenderValue>,

    /// Format hint such as `uuid` or `date-time`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Read-only view of an attribute.
///
/// Generators receive attributes as `&dyn Attribute`, so any object model can
/// be plugged in by implementing the three required accessors.
pub trait Attribute {
    /// Attribute name, used for matcher lookups.
    fn name(&self) -> &str;

    /// Candidate types, in declaration order.
    fn types(&self) -> &[TypeTag];

    /// Constraint metadata.
    fn constraints(&self) -> &Constraints;

    /// Enumerated values, empty when the attribute is unrestricted.
    fn enum_values(&self) -> &[RenderValue] {
        &self.constraints().enum_values
    }

    /// The type a generator should be looked up for.
    ///
    /// An enum wins over everything, then a recognised `format`, then the
    /// first declared type. Attributes without any type are treated as
    /// strings.
    fn bias_type(&self) -> TypeTag {
        if !self.enum_values().is_empty() {
            return TypeTag::Enum;
        }

        if let Some(format) = self.constraints().format.as_deref() {
            match TypeTag::from(format) {
                tag @ (TypeTag::Uuid | TypeTag::DateTime) => return tag,
                _ => {}
            }
        }

        self.types().first().cloned().unwrap_or(TypeTag::String)
    }
}

/// Attribute backed by plain data, deserializable from YAML.
///
/// ```yaml
/// name: rating
/// type: integer
/// minimum: 1
/// maximum: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashAttribute {
    /// Attribute name
    pub name: String,

    /// Candidate types; YAML accepts a single tag or a list
    #[serde(rename = "type", deserialize_with = "one_or_many")]
    pub types: Vec<TypeTag>,

    /// Constraint metadata
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl HashAttribute {
    /// Create an unconstrained attribute with a single type.
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            types: vec![type_tag],
            constraints: Constraints::default(),
        }
    }

    /// Replace the candidate types.
    pub fn with_types(mut self, types: Vec<TypeTag>) -> Self {
        self.types = types;
        self
    }

    /// Replace the constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the enumerated values.
    pub fn with_enum(mut self, values: Vec<RenderValue>) -> Self {
        self.constraints.enum_values = values;
        self
    }
}

impl Attribute for HashAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> &[TypeTag] {
        &self.types
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<TypeTag>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(TypeTag),
        Many(Vec<TypeTag>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(tag) => vec![tag],
        OneOrMany::Many(tags) => tags,
    })
}
