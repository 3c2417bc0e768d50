//! Runner configuration: TOML file, then CLI flags, then `API_KEY`.
//!
//! ```toml
//! base_url   = "http://localhost:8080"
//! map_name   = "Turbohill"
//! seed       = 7
//! strategy   = "persona_aware"
//! report_dir = "reports"
//!
//! [engine]
//! load_weight = 3.0
//!
//! [persona_default]
//! low_threshold      = 0.4
//! full_charge_target = 0.9
//! formula            = "scaled"
//!
//! [[personas]]
//! persona            = "Stressed"
//! low_threshold      = 0.7
//! full_charge_target = 0.85
//! formula            = "threshold"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ch_core::RunConfig;
use ch_engine::{EngineConfig, EngineResult, PersonaEntry, PersonaPolicy, PersonaTable, StrategyKind};
use ch_gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, GatewayConfig};

use crate::cli::Cli;

pub const DEFAULT_MAP: &str = "Turbohill";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub base_url:             String,
    #[serde(skip_serializing)]
    pub api_key:              String,
    pub timeout_ms:           u64,
    pub map_name:             String,
    /// Explicit run length; wins over the map's advertised `ticks`.
    pub ticks:                Option<u64>,
    pub seed:                 u64,
    pub strategy:             StrategyKind,
    pub report_dir:           Option<PathBuf>,
    pub max_retries_per_tick: u32,
    pub engine:               EngineConfig,
    /// Replaces the policy for personas the table does not name.
    pub persona_default:      Option<PersonaPolicy>,
    pub personas:             Vec<PersonaEntry>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url:             DEFAULT_BASE_URL.to_owned(),
            api_key:              String::new(),
            timeout_ms:           DEFAULT_TIMEOUT_MS,
            map_name:             DEFAULT_MAP.to_owned(),
            ticks:                None,
            seed:                 DEFAULT_SEED,
            strategy:             StrategyKind::default(),
            report_dir:           None,
            max_retries_per_tick: DEFAULT_MAX_RETRIES,
            engine:               EngineConfig::default(),
            persona_default:      None,
            personas:             Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// File (if any) plus CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None       => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(map) = &cli.map {
            self.map_name = map.clone();
        }
        if let Some(url) = &cli.base_url {
            self.base_url = url.clone();
        }
        if cli.ticks.is_some() {
            self.ticks = cli.ticks;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(strategy) = cli.strategy {
            self.strategy = strategy;
        }
        if cli.report_dir.is_some() {
            self.report_dir = cli.report_dir.clone();
        }
    }

    /// Connection settings; `API_KEY` in the environment wins over the file.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url:   self.base_url.clone(),
            api_key:    self.api_key.clone(),
            timeout_ms: self.timeout_ms,
        }
        .with_env_key()
    }

    /// Built-in persona table with the configured overrides applied.
    pub fn persona_table(&self) -> EngineResult<PersonaTable> {
        let mut table = PersonaTable::default();
        if let Some(default) = self.persona_default {
            table.set_default(default)?;
        }
        table.apply(&self.personas)?;
        Ok(table)
    }

    /// Controller settings for a map advertising `advertised` ticks.
    pub fn run_config(&self, advertised: Option<u64>) -> RunConfig {
        RunConfig {
            map_name:             self.map_name.clone(),
            total_ticks:          RunConfig::resolve_total_ticks(self.ticks, advertised),
            seed:                 self.seed,
            max_retries_per_tick: self.max_retries_per_tick,
        }
    }
}
