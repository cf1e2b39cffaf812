//! opgen — generate operational-mode command templates from an XML menu definition.
//!
//! Runs in three phases:
//!
//! 1. **Include** — substitute `#include <path>` directives with file contents
//! 2. **Parse** — read the expanded XML into an owned node tree
//! 3. **Materialize** — mirror named nodes as directories holding `node.def` files
//!
//! Output goes to `/opt/vyatta/share/vyatta-op/templates`, or to
//! `$OPGEN_TEMPLATE_DIR` when set.

mod config;
mod error;
mod include;
mod materialize;
mod model;
mod nodedef;
mod parser;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "Usage: opgen <path_to_xml_file>";

#[derive(Parser)]
#[command(
    name = "opgen",
    version,
    about = "Generate operational-mode command templates from an XML menu definition"
)]
struct Cli {
    /// XML menu definition
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

/// Core pipeline, extracted for testability.
fn generate(input: &Path, config: &config::Config) -> Result<materialize::Stats> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let expanded = include::expand_includes(&source)
        .with_context(|| format!("Failed to expand includes in {}", input.display()))?;
    let root = parser::parse(&expanded)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    fs::create_dir_all(&config.base_dir)
        .with_context(|| format!("Failed to create {}", config.base_dir.display()))?;

    let mut materializer = materialize::Materializer::new(config);
    materializer
        .materialize(&root, &config.base_dir)
        .with_context(|| format!("Failed to generate templates in {}", config.base_dir.display()))?;
    Ok(materializer.stats())
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
    };

    let config = config::Config::from_env();
    info!(
        "generating templates from {} into {}",
        cli.input.display(),
        config.base_dir.display()
    );
    let stats = generate(&cli.input, &config)?;
    info!(
        "wrote {} directories and {} node.def files",
        stats.directories, stats.node_defs
    );

    Ok(ExitCode::SUCCESS)
}
