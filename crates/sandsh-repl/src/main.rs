//! sandsh entry point.
//!
//! Launch the interactive shell:
//! ```bash
//! cargo run -p sandsh-repl
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// A deterministic in-memory shell.
#[derive(Debug, Parser)]
#[command(name = "sandsh", version, about)]
struct Cli {
    /// Load the session snapshot from this file at startup and save it
    /// back on exit.
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    sandsh_repl::run(cli.state)
}
