//! Generator: a (type, name matcher, algorithm) triple.

use crate::config::GeneratorDefinition;
use crate::matcher::Matcher;
use rand::RngCore;
use render_core::{Attribute, Constraints, RenderValue, TypeTag};
use std::fmt;
use std::sync::Arc;

/// Error type for generator construction and definition loading.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Algorithm description cannot be turned into a callable
    #[error("Malformed algorithm: {0}")]
    MalformedAlgorithm(String),

    /// Name pattern does not compile
    #[error("Invalid matcher pattern '{pattern}': {source}")]
    InvalidMatcher {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error reading a definitions file
    #[error("Failed to read generator definitions: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Error raised from inside an algorithm.
///
/// These pass through [`Generator::trigger`] and
/// [`Registry::trigger`](crate::Registry::trigger) untouched.
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    /// Attribute constraints admit no value
    #[error("Invalid constraint on '{attribute}': {reason}")]
    InvalidConstraint { attribute: String, reason: String },

    /// Failure reported by a caller-supplied algorithm
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AlgorithmError {
    pub(crate) fn invalid_constraint(attribute: &dyn Attribute, reason: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            attribute: attribute.name().to_string(),
            reason: reason.into(),
        }
    }
}

/// Result of running an algorithm.
pub type AlgorithmResult = Result<RenderValue, AlgorithmError>;

/// Shared algorithm callable.
pub type Algorithm = Arc<dyn Fn(&mut GenerationContext<'_>) -> AlgorithmResult + Send + Sync>;

/// The single argument handed to an algorithm.
pub struct GenerationContext<'a> {
    /// Attribute a value is requested for
    pub attribute: &'a dyn Attribute,
    /// Randomness source for this invocation
    pub rng: &'a mut dyn RngCore,
}

impl<'a> GenerationContext<'a> {
    pub fn new(attribute: &'a dyn Attribute, rng: &'a mut dyn RngCore) -> Self {
        Self { attribute, rng }
    }

    /// Shorthand for the attribute's constraints.
    pub fn constraints(&self) -> &'a Constraints {
        self.attribute.constraints()
    }
}

/// Immutable generator definition.
#[derive(Clone)]
pub struct Generator {
    target_type: TypeTag,
    matcher: Matcher,
    algorithm: Algorithm,
}

impl Generator {
    /// Create a generator from a typed algorithm.
    pub fn new<F>(target_type: TypeTag, matcher: impl Into<Matcher>, algorithm: F) -> Self
    where
        F: Fn(&mut GenerationContext<'_>) -> AlgorithmResult + Send + Sync + 'static,
    {
        Self::from_parts(target_type, matcher.into(), Arc::new(algorithm))
    }

    pub(crate) fn from_parts(target_type: TypeTag, matcher: Matcher, algorithm: Algorithm) -> Self {
        Self {
            target_type,
            matcher,
            algorithm,
        }
    }

    /// Build a generator from a declarative definition.
    ///
    /// Fails without side effects when the matcher does not compile or the
    /// algorithm description is malformed.
    pub fn from_definition(definition: &GeneratorDefinition) -> Result<Self, GeneratorError> {
        let matcher = match definition.matcher.as_deref() {
            None => Matcher::Any,
            Some(pattern) => {
                Matcher::pattern(pattern).map_err(|source| GeneratorError::InvalidMatcher {
                    pattern: pattern.to_string(),
                    source,
                })?
            }
        };
        let algorithm = definition.algorithm.build()?;

        Ok(Self::from_parts(
            definition.target_type.clone(),
            matcher,
            algorithm,
        ))
    }

    /// Type this generator produces values for.
    pub fn target_type(&self) -> &TypeTag {
        &self.target_type
    }

    /// Attribute-name matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Whether this generator serves `target_type` values for `attribute_name`.
    pub fn matches(&self, target_type: &TypeTag, attribute_name: &str) -> bool {
        self.target_type == *target_type && self.matcher.is_match(attribute_name)
    }

    /// Run the algorithm with thread-local randomness.
    pub fn trigger(&self, attribute: &dyn Attribute) -> AlgorithmResult {
        self.trigger_with_rng(attribute, &mut rand::thread_rng())
    }

    /// Run the algorithm with the given randomness source.
    pub fn trigger_with_rng(&self, attribute: &dyn Attribute, rng: &mut dyn RngCore) -> AlgorithmResult {
        let mut context = GenerationContext::new(attribute, rng);
        (self.algorithm)(&mut context)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("target_type", &self.target_type)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}
