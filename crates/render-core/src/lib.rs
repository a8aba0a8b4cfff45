//! Core types for render-gen.
//!
//! This crate provides the types shared between the generator registry and
//! its callers:
//!
//! - [`TypeTag`] - Semantic type identifier for attributes and generators
//! - [`RenderValue`] - Values produced by generators
//! - [`Attribute`] - Read-only attribute contract consumed by generators
//! - [`HashAttribute`] - Plain-data attribute, loadable from YAML
//! - [`AttributeSchema`] - Attribute lists loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! render-core (this crate)
//!    │
//!    ├─── render-generator  (registry + built-in algorithms)
//!    │
//!    └─── render-gen        (CLI, schema-driven record generation)
//! ```
//!
//! # Example
//!
//! ```rust
//! use render_core::{Attribute, Constraints, HashAttribute, TypeTag};
//!
//! let attribute = HashAttribute::new("rating", TypeTag::Integer).with_constraints(Constraints {
//!     minimum: Some(1.0),
//!     maximum: Some(5.0),
//!     ..Default::default()
//! });
//!
//! assert_eq!(attribute.bias_type(), TypeTag::Integer);
//! ```

pub mod attribute;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use attribute::{Attribute, Constraints, HashAttribute};
pub use schema::{AttributeSchema, SchemaError};
pub use types::TypeTag;
pub use values::RenderValue;
