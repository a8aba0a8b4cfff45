//! Ordered generator registry with newest-first lookup.

use crate::algorithms;
use crate::config::GeneratorDefinition;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::generator::{AlgorithmError, AlgorithmResult, GenerationContext, Generator, GeneratorError};
use crate::matcher::Matcher;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use render_core::{Attribute, RenderValue, TypeTag};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Ordered collection of generators plus lookup and dispatch.
///
/// Lookup scans from the most recently added generator backwards, so later
/// registrations shadow earlier ones for the same type and name without
/// removing them.
///
/// Every dispatch draws a fresh seed from the registry RNG and runs the
/// algorithm on its own `StdRng`, which keeps output reproducible under
/// [`Registry::with_seed`] and lets algorithms call back into the registry.
pub struct Registry {
    instances: Vec<Generator>,
    rng: Mutex<StdRng>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            rng: Mutex::new(StdRng::from_entropy()),
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Create a registry seeded with the built-in generators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        algorithms::register_defaults(&mut registry);
        registry
    }

    /// Make dispatch reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Replace the sink that receives lookup-miss warnings.
    pub fn with_diagnostics(self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            diagnostics,
            ..self
        }
    }

    /// Create a generator and append it.
    pub fn create<F>(
        &mut self,
        target_type: TypeTag,
        matcher: impl Into<Matcher>,
        algorithm: F,
    ) -> &Generator
    where
        F: Fn(&mut GenerationContext<'_>) -> AlgorithmResult + Send + Sync + 'static,
    {
        self.register(Generator::new(target_type, matcher, algorithm))
    }

    /// Append a prebuilt generator.
    pub fn register(&mut self, generator: Generator) -> &Generator {
        debug!(
            "Registering generator for {} matching {}",
            generator.target_type(),
            generator.matcher()
        );
        self.instances.push(generator);
        &self.instances[self.instances.len() - 1]
    }

    /// Build and append every definition.
    ///
    /// Nothing is appended unless all definitions build.
    pub fn load_definitions(
        &mut self,
        definitions: &[GeneratorDefinition],
    ) -> Result<usize, GeneratorError> {
        let generators = definitions
            .iter()
            .map(Generator::from_definition)
            .collect::<Result<Vec<_>, _>>()?;

        let count = generators.len();
        for generator in generators {
            self.register(generator);
        }
        Ok(count)
    }

    /// Newest generator serving `target_type` for `attribute_name`.
    pub fn find(&self, target_type: &TypeTag, attribute_name: &str) -> Option<&Generator> {
        self.instances
            .iter()
            .rev()
            .find(|generator| generator.matches(target_type, attribute_name))
    }

    /// Find a generator and run it.
    ///
    /// A miss is reported once to the diagnostic sink and yields `Ok(None)`.
    /// Errors from the algorithm are returned as-is.
    pub fn trigger(
        &self,
        target_type: &TypeTag,
        attribute_name: &str,
        attribute: &dyn Attribute,
    ) -> Result<Option<RenderValue>, AlgorithmError> {
        let Some(generator) = self.find(target_type, attribute_name) else {
            self.diagnostics.warn(&format!(
                "Could not find a generator for type '{target_type}' matching attribute '{attribute_name}'"
            ));
            return Ok(None);
        };

        debug!("Triggering {target_type} generator for '{attribute_name}'");
        let mut rng = StdRng::seed_from_u64(self.next_seed());
        generator.trigger_with_rng(attribute, &mut rng).map(Some)
    }

    /// Trigger for an attribute's own bias type and name.
    pub fn trigger_attribute(
        &self,
        attribute: &dyn Attribute,
    ) -> Result<Option<RenderValue>, AlgorithmError> {
        self.trigger(&attribute.bias_type(), attribute.name(), attribute)
    }

    fn next_seed(&self) -> u64 {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).gen()
    }

    /// Registered generators, oldest first.
    pub fn instances(&self) -> &[Generator] {
        &self.instances
    }

    /// Replace every generator, returning the previous list.
    ///
    /// Paired with a clone of [`Registry::instances`] this snapshots and
    /// restores registry state.
    pub fn set_instances(&mut self, instances: Vec<Generator>) -> Vec<Generator> {
        std::mem::replace(&mut self.instances, instances)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no generator is registered.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("instances", &self.instances)
            .finish_non_exhaustive()
    }
}
