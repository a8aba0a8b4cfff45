//! Generator registry for render-gen.
//!
//! This crate provides the [`Registry`], an ordered list of [`Generator`]s,
//! each a (type, name matcher, algorithm) triple. Lookup scans newest first,
//! so callers override the built-in generators simply by registering their
//! own after them.
//!
//! # Architecture
//!
//! ```text
//! Registry::trigger(type, name, attribute)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │     Registry     │  find: newest-first scan of instances
//! │                  │  miss: one warning, Ok(None)
//! │  - instances     │
//! │  - rng (StdRng)  │
//! │  - diagnostics   │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   Generator::trigger_with_rng(attribute, rng)
//!          │
//!          ▼
//!   algorithm(&mut GenerationContext) -> RenderValue
//! ```
//!
//! # Example
//!
//! ```rust
//! use render_core::{Constraints, HashAttribute, RenderValue, TypeTag};
//! use render_generator::{Matcher, Registry};
//!
//! let mut registry = Registry::with_defaults().with_seed(42);
//! registry.create(TypeTag::String, Matcher::pattern("^title$").unwrap(), |_ctx| {
//!     Ok(RenderValue::from("Casablanca"))
//! });
//!
//! let title = HashAttribute::new("title", TypeTag::String);
//! assert_eq!(
//!     registry.trigger_attribute(&title).unwrap(),
//!     Some(RenderValue::from("Casablanca"))
//! );
//!
//! let rating = HashAttribute::new("rating", TypeTag::Integer).with_constraints(Constraints {
//!     minimum: Some(60.0),
//!     maximum: Some(70.0),
//!     multiple_of: Some(13.0),
//!     ..Default::default()
//! });
//! assert_eq!(
//!     registry.trigger_attribute(&rating).unwrap(),
//!     Some(RenderValue::Int64(65))
//! );
//! ```
//!
//! # Built-in generators
//!
//! - `string` - alphanumeric filler honouring `minLength`/`maxLength`
//! - `integer` - honours `minimum`, `maximum`, exclusivity and `multipleOf`
//! - `number` - float counterpart of `integer`
//! - `boolean`, `uuid`, `date-time`, `null`
//! - `enum` - a member of the attribute's `enum`

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod generator;
pub mod matcher;
pub mod registry;

// Re-exports for convenience
pub use config::{AlgorithmConfig, GeneratorDefinition, GeneratorDefinitions};
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use generator::{
    Algorithm, AlgorithmError, AlgorithmResult, GenerationContext, Generator, GeneratorError,
};
pub use matcher::Matcher;
pub use registry::Registry;
