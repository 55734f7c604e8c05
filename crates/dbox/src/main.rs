//! # dbox
//!
//! Convert human-readable database shell `SELECT` output into rows.
//!
//! ## Overview
//!
//! Reads mysql, psql (ASCII or unicode line style) or psql/sqlite-style
//! space-aligned output and writes:
//! - Tab-separated values (default)
//! - Comma-separated values
//! - JSON records
//!
//! ## Architecture
//!
//! This is Layer 2 - the binary that ties together:
//! - dbox-core: Core types and configuration
//! - dbox-io: Input loading and export
//! - dbox-parser: Ruler analysis and row slicing

use clap::Parser;
use dbox::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Initialize logging on stderr so stdout stays clean for exported rows
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level(&config))),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("dbox v{} starting", env!("CARGO_PKG_VERSION"));

    run(&cli, &config).map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })
}
