//! render-gen library
//!
//! Schema-driven synthetic record generation on top of the
//! [`render_generator::Registry`].
//!
//! # Features
//!
//! - Constraint-aware defaults: strings, integers, numbers, booleans, UUIDs,
//!   timestamps and enums out of the box
//! - Overridable: generator definitions loaded from YAML shadow the defaults
//!   for the types and attribute names they match
//! - Reproducible: a seed makes every run produce the same records
//!
//! # CLI Usage
//!
//! ```bash
//! # Five records from a schema
//! render-gen generate --schema films.yaml --count 5 --seed 42
//!
//! # With custom generators layered over the defaults
//! render-gen generate --schema films.yaml --generators generators.yaml
//!
//! # Show which generators are registered, newest first
//! render-gen list-generators --generators generators.yaml
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod generate;

pub use generate::{build_registry, Record, RecordGenerator};

#[derive(Parser, Clone, Debug)]
pub struct GenerateOpts {
    /// Attribute schema file (YAML)
    #[arg(long, value_name = "PATH", env = "RENDER_SCHEMA")]
    pub schema: PathBuf,

    /// Generator definitions layered over the defaults (YAML)
    #[arg(long, value_name = "PATH", env = "RENDER_GENERATORS")]
    pub generators: Option<PathBuf>,

    /// Number of records to generate
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// Seed for reproducible output (overrides the schema seed)
    #[arg(long, env = "RENDER_SEED")]
    pub seed: Option<u64>,

    /// Only generate these attributes (repeatable)
    #[arg(long = "attribute", value_name = "NAME")]
    pub attributes: Vec<String>,
}
