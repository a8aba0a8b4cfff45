//! Attribute schema files.
//!
//! A schema is a YAML document listing the attributes a record is made of:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! attributes:
//!   - name: id
//!     type: string
//!     format: uuid
//!   - name: title
//!     type: string
//!     minLength: 3
//!     maxLength: 40
//! ```

use crate::attribute::HashAttribute;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Attribute not found in schema
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    /// Attribute declared with an empty type list
    #[error("Attribute '{0}' declares no type")]
    MissingType(String),
}

fn default_version() -> u32 {
    1
}

/// Collection of attributes loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Optional seed for reproducible generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Attribute definitions, in output order
    pub attributes: Vec<HashAttribute>,

    /// Cached attribute lookup (not serialized)
    #[serde(skip)]
    attribute_map: HashMap<String, usize>,
}

impl AttributeSchema {
    /// Create a schema from a list of attributes.
    pub fn new(attributes: Vec<HashAttribute>) -> Self {
        let mut schema = Self {
            version: default_version(),
            seed: None,
            attributes,
            attribute_map: HashMap::new(),
        };
        schema.build_attribute_map();
        schema
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: AttributeSchema = serde_yaml::from_str(yaml)?;
        if let Some(attribute) = schema.attributes.iter().find(|a| a.types.is_empty()) {
            return Err(SchemaError::MissingType(attribute.name.clone()));
        }
        schema.build_attribute_map();
        Ok(schema)
    }

    /// Build the internal attribute lookup map.
    fn build_attribute_map(&mut self) {
        self.attribute_map = self
            .attributes
            .iter()
            .enumerate()
            .map(|(idx, attribute)| (attribute.name.clone(), idx))
            .collect();
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&HashAttribute> {
        self.attribute_map
            .get(name)
            .and_then(|&idx| self.attributes.get(idx))
    }

    /// Get an attribute by name, failing if it is not declared.
    pub fn require_attribute(&self, name: &str) -> Result<&HashAttribute, SchemaError> {
        self.get_attribute(name)
            .ok_or_else(|| SchemaError::AttributeNotFound(name.to_string()))
    }

    /// Get all attribute names in declaration order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::types::TypeTag;
    use std::io::Write;

    const SCHEMA: &str = r#"
version: 1
seed: 7
attributes:
  - name: id
    type: string
    format: uuid
  - name: title
    type: string
    minLength: 3
    maxLength: 40
  - name: rating
    type: number
    minimum: 0
    maximum: 10
"#;

    #[test]
    fn test_from_yaml() {
        let schema = AttributeSchema::from_yaml(SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.attribute_names(), vec!["id", "title", "rating"]);

        let rating = schema.get_attribute("rating").expect("rating should exist");
        assert_eq!(rating.types(), &[TypeTag::Float]);
        assert_eq!(rating.constraints().maximum, Some(10.0));

        assert_eq!(
            schema.get_attribute("id").map(|a| a.bias_type()),
            Some(TypeTag::Uuid)
        );
    }

    #[test]
    fn test_missing_attribute() {
        let schema = AttributeSchema::from_yaml(SCHEMA).unwrap();
        assert!(schema.get_attribute("nonexistent").is_none());
        assert!(matches!(
            schema.require_attribute("nonexistent"),
            Err(SchemaError::AttributeNotFound(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_empty_type_list_rejected() {
        let yaml = r#"
attributes:
  - name: broken
    type: []
"#;
        let result = AttributeSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::MissingType(name)) if name == "broken"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCHEMA.as_bytes()).unwrap();

        let schema = AttributeSchema::from_file(file.path()).unwrap();
        assert_eq!(schema.attributes.len(), 3);
        assert!(schema.get_attribute("title").is_some());
    }

    #[test]
    fn test_from_missing_file() {
        let result = AttributeSchema::from_file("/nonexistent/schema.yaml");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }
}
