//! Narrascope - narrative intelligence CLI
//!
//! Thin binary wrapper: initialize logging, parse CLI args, dispatch.

use anyhow::Result;
use clap::Parser;
use narrascope::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins; otherwise --log-level. Logs go to stderr so JSON
    // output on stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
