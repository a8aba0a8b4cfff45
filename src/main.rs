//! Command-line interface for render-gen
//!
//! # Usage Examples
//!
//! ## Generate records
//! ```bash
//! # Ten reproducible records
//! render-gen generate --schema films.yaml --count 10 --seed 42
//!
//! # Only some attributes, with custom generators over the defaults
//! render-gen generate --schema films.yaml \
//!   --generators generators.yaml \
//!   --attribute title --attribute year
//! ```
//!
//! ## Inspect the registry
//! ```bash
//! render-gen list-generators --generators generators.yaml
//! ```
//!
//! Set `RUST_LOG=warn` to see attributes no generator matched.

use anyhow::Context;
use clap::{Parser, Subcommand};
use render_core::AttributeSchema;
use render_gen::{build_registry, GenerateOpts, RecordGenerator};
use render_generator::GeneratorDefinitions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "render-gen")]
#[command(about = "Generate synthetic values that satisfy schema constraints")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records as JSON lines
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,
    },

    /// List registered generators, newest (highest priority) first
    ListGenerators {
        /// Generator definitions layered over the defaults (YAML)
        #[arg(long, value_name = "PATH", env = "RENDER_GENERATORS")]
        generators: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { opts } => run_generate(opts),
        Commands::ListGenerators { generators } => run_list_generators(generators.as_deref()),
    }
}

fn load_definitions(path: Option<&Path>) -> anyhow::Result<Option<GeneratorDefinitions>> {
    path.map(|path| {
        GeneratorDefinitions::from_file(path)
            .with_context(|| format!("Failed to load generator definitions from {path:?}"))
    })
    .transpose()
}

fn run_generate(opts: GenerateOpts) -> anyhow::Result<()> {
    let schema = AttributeSchema::from_file(&opts.schema)
        .with_context(|| format!("Failed to load schema from {:?}", opts.schema))?;
    let definitions = load_definitions(opts.generators.as_deref())?;

    let seed = opts.seed.or(schema.seed);
    tracing::info!(
        "Generating {} records for {} attributes (seed: {:?})",
        opts.count,
        schema.attributes.len(),
        seed
    );

    let registry = build_registry(definitions.as_ref(), seed)?;
    let mut generator = if opts.attributes.is_empty() {
        RecordGenerator::new(registry, &schema)
    } else {
        RecordGenerator::with_attributes(registry, &schema, &opts.attributes)?
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in generator.records(opts.count) {
        let record = record?;
        serde_json::to_writer(&mut out, &record).context("Failed to write record")?;
        writeln!(out)?;
    }

    tracing::info!("Generated {} records", generator.current_index());
    Ok(())
}

fn run_list_generators(generators: Option<&Path>) -> anyhow::Result<()> {
    let definitions = load_definitions(generators)?;
    let registry = build_registry(definitions.as_ref(), None)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (priority, generator) in registry.instances().iter().rev().enumerate() {
        writeln!(
            out,
            "{priority:>3}  {:<12} {}",
            generator.target_type().to_string(),
            generator.matcher()
        )?;
    }
    Ok(())
}
