//! Record generation driven by an attribute schema.
//!
//! Each record holds one value per schema attribute, produced by triggering
//! the registry with the attribute's bias type and name. Attributes without a
//! matching generator are left out of the record; the registry has already
//! warned about them.

use anyhow::Context;
use render_core::{AttributeSchema, HashAttribute, RenderValue};
use render_generator::{GeneratorDefinitions, Registry};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Build the default registry, layer user definitions over it and apply the
/// seed.
pub fn build_registry(
    definitions: Option<&GeneratorDefinitions>,
    seed: Option<u64>,
) -> anyhow::Result<Registry> {
    let mut registry = Registry::with_defaults();

    if let Some(definitions) = definitions {
        let count = registry
            .load_definitions(&definitions.generators)
            .context("Failed to build generator definitions")?;
        tracing::info!("Loaded {count} custom generators");
    }

    Ok(match seed {
        Some(seed) => registry.with_seed(seed),
        None => registry,
    })
}

/// One generated record, fields in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position of this record in the run
    pub index: u64,
    /// Generated fields
    pub fields: Vec<(String, RenderValue)>,
}

impl Record {
    /// Get a field value by attribute name.
    pub fn get_field(&self, name: &str) -> Option<&RenderValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Produces records for a schema.
pub struct RecordGenerator {
    registry: Registry,
    attributes: Vec<HashAttribute>,
    index: u64,
}

impl RecordGenerator {
    /// Generate every attribute of `schema`.
    pub fn new(registry: Registry, schema: &AttributeSchema) -> Self {
        Self {
            registry,
            attributes: schema.attributes.clone(),
            index: 0,
        }
    }

    /// Generate only the named attributes, in the order given.
    pub fn with_attributes(
        registry: Registry,
        schema: &AttributeSchema,
        names: &[String],
    ) -> anyhow::Result<Self> {
        let attributes = names
            .iter()
            .map(|name| schema.require_attribute(name).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry,
            attributes,
            index: 0,
        })
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> anyhow::Result<Record> {
        let mut fields = Vec::with_capacity(self.attributes.len());

        for attribute in &self.attributes {
            let value = self
                .registry
                .trigger_attribute(attribute)
                .with_context(|| {
                    format!("Failed to generate a value for attribute '{}'", attribute.name)
                })?;

            if let Some(value) = value {
                fields.push((attribute.name.clone(), value));
            }
        }

        let record = Record {
            index: self.index,
            fields,
        };
        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// The registry used for dispatch.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = anyhow::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
