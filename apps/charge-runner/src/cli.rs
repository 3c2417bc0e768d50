//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ch_engine::StrategyKind;

/// Plays a charging simulation map tick by tick against the simulation service.
#[derive(Parser, Debug)]
#[command(name = "charge-runner", version)]
pub struct Cli {
    /// TOML configuration file.  Flags below override its values.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Map to play.
    #[arg(long, global = true)]
    pub map: Option<String>,

    /// Simulation service base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Ticks to play (default: the map's advertised length, else 288).
    #[arg(long, global = true)]
    pub ticks: Option<u64>,

    /// Seed for the recommendation tie-breaks.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// persona-aware, threshold or idle.
    #[arg(long, global = true)]
    pub strategy: Option<StrategyKind>,

    /// Write submissions.csv and customer_scores.csv here.
    #[arg(long, global = true)]
    pub report_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the map (the default).
    Run,
    /// Print the map's metadata, persona mix and stations per zone.
    Inspect,
}
