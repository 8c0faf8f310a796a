//! # grocery-cli
//!
//! Command-line front end for grocery-core.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CliConfig::load()      env vars → config (fails fast on bad values) │
//! │  2. init_tracing()         stderr subscriber, filter from GROCERY_LOG   │
//! │  3. load_catalog()         GROCERY_CATALOG_PATH or built-in products    │
//! │  4. Command::parse()       price / prices / rules / help                │
//! │  5. execute()              text for stdout                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `GROCERY_CATALOG_PATH` - JSON catalog file (optional)
//! - `GROCERY_LOG` - tracing filter (default `warn`)

pub mod commands;
pub mod config;
pub mod input;

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use grocery_core::InMemoryCatalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{execute, Command};
use crate::config::CliConfig;

/// Runs the CLI with the process arguments (program name excluded).
pub fn run(args: &[String]) -> anyhow::Result<()> {
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);
    info!(
        catalog = ?config.catalog_path,
        filter = %config.log_filter,
        "Configuration loaded"
    );

    let catalog = load_catalog(&config)?;
    let command = Command::parse(args)?;
    let output = execute(&command, &catalog, io::stdin().lock())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Loads the configured catalog, or the built-in one.
pub fn load_catalog(config: &CliConfig) -> anyhow::Result<InMemoryCatalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(InMemoryCatalog::with_defaults());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = InMemoryCatalog::from_json(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;

    info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the receipt.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
