//! charge-runner: plays a charging simulation map against the service.
//!
//! ```text
//! charge-runner --map Turbohill --report-dir reports
//! charge-runner inspect --map Turbohill
//! API_KEY=… charge-runner --config runner.toml --verbose
//! ```

mod cli;
mod commands;
mod config;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::RunnerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RunnerConfig::resolve(&cli)?;
    match cli.command.unwrap_or(Command::Run) {
        Command::Run     => commands::run(&config),
        Command::Inspect => commands::inspect(&config),
    }
}

/// `RUST_LOG` when set, else `info`; `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
