//! Tests for the runner's CLI and configuration layer.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use ch_engine::{ChargeFormula, StrategyKind};
use ch_snapshot::Persona;

use crate::cli::{Cli, Command};
use crate::config::{DEFAULT_MAP, DEFAULT_SEED, RunnerConfig};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("charge-runner").chain(args.iter().copied())).unwrap()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_is_the_default_command() {
        let cli = parse(&[]);
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&["inspect", "--map", "Windcity", "-v"]);
        assert_eq!(cli.command, Some(Command::Inspect));
        assert_eq!(cli.map.as_deref(), Some("Windcity"));
        assert!(cli.verbose);
    }

    #[test]
    fn strategy_flag_accepts_kebab_case() {
        let cli = parse(&["--strategy", "persona-aware"]);
        assert_eq!(cli.strategy, Some(StrategyKind::PersonaAware));
        assert!(Cli::try_parse_from(["charge-runner", "--strategy", "greedy"]).is_err());
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = RunnerConfig::resolve(&parse(&[])).unwrap();
        assert_eq!(config.map_name, DEFAULT_MAP);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.strategy, StrategyKind::PersonaAware);
        assert_eq!(config.ticks, None);
        assert_eq!(config.max_retries_per_tick, 3);
    }

    #[test]
    fn full_file_parses() {
        let config = RunnerConfig::from_toml(
            r#"
            base_url   = "https://sim.example.com"
            map_name   = "Windcity"
            ticks      = 96
            seed       = 7
            strategy   = "threshold"
            report_dir = "out"

            [engine]
            load_weight = 3.5

            [persona_default]
            low_threshold      = 0.3
            full_charge_target = 0.8
            formula            = "full"

            [[personas]]
            persona            = "Stressed"
            low_threshold      = 0.7
            full_charge_target = 0.85
            formula            = "threshold"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://sim.example.com");
        assert_eq!(config.ticks, Some(96));
        assert_eq!(config.strategy, StrategyKind::Threshold);
        assert_eq!(config.report_dir, Some(PathBuf::from("out")));
        assert_eq!(config.engine.load_weight, 3.5);
        assert_eq!(config.engine.charge_rate_per_tick, 0.1);

        let table = config.persona_table().unwrap();
        assert_eq!(table.policy(&Persona::Stressed).low_threshold, 0.7);
        let unknown = table.policy(&Persona::Other("Tourist".into()));
        assert_eq!(unknown.formula, ChargeFormula::Full);
        assert_eq!(unknown.full_charge_target, 0.8);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(RunnerConfig::from_toml("mapname = \"typo\"").is_err());
    }

    #[test]
    fn invalid_persona_override_fails_table_build() {
        let config = RunnerConfig::from_toml(
            r#"
            [[personas]]
            persona            = "Neutral"
            low_threshold      = 1.5
            full_charge_target = 0.9
            formula            = "scaled"
            "#,
        )
        .unwrap();
        assert!(config.persona_table().is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runner.toml");
        std::fs::write(&path, "map_name = \"Windcity\"\nseed = 1\nticks = 10\n").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--seed", "9", "--ticks", "20"]);
        let config = RunnerConfig::resolve(&cli).unwrap();
        assert_eq!(config.map_name, "Windcity");
        assert_eq!(config.seed, 9);
        assert_eq!(config.ticks, Some(20));
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/runner.toml"]);
        let err = RunnerConfig::resolve(&cli).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn horizon_prefers_explicit_then_advertised() {
        let mut config = RunnerConfig::default();
        assert_eq!(config.run_config(Some(144)).total_ticks, 144);
        assert_eq!(config.run_config(None).total_ticks, 288);
        config.ticks = Some(12);
        let run = config.run_config(Some(144));
        assert_eq!(run.total_ticks, 12);
        assert_eq!(run.map_name, DEFAULT_MAP);
        assert_eq!(run.seed, DEFAULT_SEED);
    }
}
