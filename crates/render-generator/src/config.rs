//! Declarative generator definitions.
//!
//! Definitions let callers register generators from YAML instead of code:
//!
//! ```yaml
//! generators:
//!   - type: string
//!     matcher: "^title$"
//!     algorithm:
//!       type: one_of
//!       values: [Casablanca, Vertigo]
//!   - type: integer
//!     matcher: "year"
//!     algorithm:
//!       type: int_range
//!       min: 1920
//!       max: 2024
//! ```
//!
//! A definition only becomes a [`Generator`](crate::Generator) through
//! [`Generator::from_definition`](crate::Generator::from_definition), which
//! rejects malformed algorithm descriptions.

use crate::algorithms::{self, pattern, timestamp, uuid};
use crate::generator::{Algorithm, GenerationContext, GeneratorError};
use rand::seq::SliceRandom;
use rand::Rng;
use render_core::{RenderValue, TypeTag};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Algorithm description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    /// Always the same value
    Static {
        /// The value to return
        value: RenderValue,
    },

    /// Random selection from a list
    OneOf {
        /// Values to select from
        values: Vec<RenderValue>,
    },

    /// String with placeholders (`{name}`, `{uuid}`, `{rand:N}`)
    Pattern {
        /// Pattern string
        pattern: String,
    },

    /// Random UUID v4
    UuidV4,

    /// Random integer in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Random float in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Boolean with a configurable probability of `true`
    WeightedBool {
        /// Probability of true (0.0 to 1.0)
        true_weight: f64,
    },

    /// Random timestamp in a range
    TimestampRange {
        /// Start timestamp (RFC 3339 or YYYY-MM-DD)
        start: String,
        /// End timestamp (RFC 3339 or YYYY-MM-DD)
        end: String,
    },

    /// Constraint-aware built-in algorithm of another type
    Builtin {
        /// Type whose built-in algorithm is reused
        of: TypeTag,
    },
}

fn malformed(reason: impl Into<String>) -> GeneratorError {
    GeneratorError::MalformedAlgorithm(reason.into())
}

impl AlgorithmConfig {
    /// Validate the description and turn it into a callable.
    pub fn build(&self) -> Result<Algorithm, GeneratorError> {
        let algorithm: Algorithm = match self.clone() {
            Self::Static { value } => {
                Arc::new(move |_ctx: &mut GenerationContext<'_>| Ok(value.clone()))
            }

            Self::OneOf { values } => {
                if values.is_empty() {
                    return Err(malformed("one_of requires at least one value"));
                }
                Arc::new(move |ctx: &mut GenerationContext<'_>| {
                    Ok(values
                        .choose(&mut *ctx.rng)
                        .cloned()
                        .unwrap_or(RenderValue::Null))
                })
            }

            Self::Pattern { pattern: template } => Arc::new(move |ctx: &mut GenerationContext<'_>| {
                let name = ctx.attribute.name();
                Ok(RenderValue::String(pattern::generate_pattern(
                    &template,
                    &mut *ctx.rng,
                    name,
                )))
            }),

            Self::UuidV4 => Arc::new(|ctx: &mut GenerationContext<'_>| {
                Ok(RenderValue::Uuid(uuid::generate_uuid_v4(&mut *ctx.rng)))
            }),

            Self::IntRange { min, max } => {
                if min > max {
                    return Err(malformed(format!("int_range min {min} exceeds max {max}")));
                }
                Arc::new(move |ctx: &mut GenerationContext<'_>| {
                    Ok(RenderValue::Int64(ctx.rng.gen_range(min..=max)))
                })
            }

            Self::FloatRange { min, max } => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(malformed(format!(
                        "float_range [{min}, {max}] is not a finite ascending range"
                    )));
                }
                Arc::new(move |ctx: &mut GenerationContext<'_>| {
                    Ok(RenderValue::Float64(ctx.rng.gen_range(min..=max)))
                })
            }

            Self::WeightedBool { true_weight } => {
                if !(0.0..=1.0).contains(&true_weight) {
                    return Err(malformed(format!(
                        "weighted_bool true_weight {true_weight} is outside [0, 1]"
                    )));
                }
                Arc::new(move |ctx: &mut GenerationContext<'_>| {
                    Ok(RenderValue::Bool(ctx.rng.gen_bool(true_weight)))
                })
            }

            Self::TimestampRange { start, end } => {
                let (Some(start), Some(end)) = (
                    timestamp::parse_timestamp(&start),
                    timestamp::parse_timestamp(&end),
                ) else {
                    return Err(malformed(format!(
                        "timestamp_range bounds '{start}'..'{end}' are not valid timestamps"
                    )));
                };
                if start > end {
                    return Err(malformed("timestamp_range start is after end"));
                }
                Arc::new(move |ctx: &mut GenerationContext<'_>| {
                    Ok(RenderValue::DateTime(timestamp::generate_timestamp_range(
                        &mut *ctx.rng,
                        start,
                        end,
                    )))
                })
            }

            Self::Builtin { of } => match algorithms::builtin_for(&of) {
                Some(builtin) => Arc::new(builtin),
                None => return Err(malformed(format!("no built-in algorithm for type '{of}'"))),
            },
        };

        Ok(algorithm)
    }
}

/// One generator declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorDefinition {
    /// Type the generator produces values for
    #[serde(rename = "type")]
    pub target_type: TypeTag,

    /// Case-insensitive name pattern; absent matches every name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,

    /// Algorithm description
    pub algorithm: AlgorithmConfig,
}

/// A file of generator declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorDefinitions {
    /// Declarations, weakest first
    #[serde(default)]
    pub generators: Vec<GeneratorDefinition>,
}

impl GeneratorDefinitions {
    /// Load definitions from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse definitions from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, GeneratorError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
