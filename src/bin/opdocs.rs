//! opdocs CLI - generates the operations reference document.
//!
//! With no arguments it reads `src/operations/*.ts` under the current
//! directory and writes `docs/operations.md`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::generate_command(cli)
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over info.
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    })
}
