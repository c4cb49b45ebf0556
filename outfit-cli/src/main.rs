//! Binary crate for the `outfit` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Reading an observation from flags, a file or stdin
//! - Interactive configuration
//! - Human-friendly and JSON output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);
    cmd.run().await
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
