//! The `Strategy` trait: the extension point the tick controller calls.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ch_core::{RandomSource, Tick};
use ch_snapshot::Snapshot;

use crate::{
    EngineConfig, EngineError, EngineResult, IdleStrategy, PersonaAwareStrategy, PersonaTable,
    Recommendation, ThresholdStrategy,
};

/// Pluggable recommendation policy.
///
/// Implement this trait to change how customers are routed without touching
/// the tick loop.  `recommend` receives a read-only [`Snapshot`] and an
/// injected random source; implementations must not keep state between
/// calls, so a retried tick can be regenerated from scratch.
///
/// # Example
///
/// ```rust,ignore
/// struct NearestOnly;
///
/// impl Strategy for NearestOnly {
///     fn name(&self) -> &'static str { "nearest-only" }
///
///     fn recommend(&self, snap: &Snapshot, now: Tick, _rng: &mut dyn RandomSource)
///         -> Vec<Recommendation>
///     {
///         let Some(station) = snap.stations.first() else { return vec![] };
///         snap.customers
///             .iter()
///             .filter(|c| c.is_eligible(now))
///             .map(|c| Recommendation::new(c.id.clone(), station.id.clone(), 1.0))
///             .collect()
///     }
/// }
/// ```
pub trait Strategy: Send + Sync + 'static {
    /// Short human-readable name for logs.
    fn name(&self) -> &'static str;

    /// Produce at most one recommendation per eligible customer.
    fn recommend(
        &self,
        snapshot: &Snapshot,
        now:      Tick,
        rng:      &mut dyn RandomSource,
    ) -> Vec<Recommendation>;
}

impl Strategy for Box<dyn Strategy> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recommend(&self, snapshot: &Snapshot, now: Tick, rng: &mut dyn RandomSource) -> Vec<Recommendation> {
        (**self).recommend(snapshot, now, rng)
    }
}

// ── StrategyKind ──────────────────────────────────────────────────────────────

/// Configuration-level strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    PersonaAware,
    Threshold,
    Idle,
}

impl StrategyKind {
    /// Validate the inputs and build the selected strategy.
    pub fn build(self, config: EngineConfig, table: PersonaTable) -> EngineResult<Box<dyn Strategy>> {
        config.validate()?;
        Ok(match self {
            StrategyKind::PersonaAware => Box::new(PersonaAwareStrategy::new(config, table)),
            StrategyKind::Threshold    => Box::new(ThresholdStrategy::new(table)),
            StrategyKind::Idle         => Box::new(IdleStrategy),
        })
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "persona_aware" => Ok(StrategyKind::PersonaAware),
            "threshold"     => Ok(StrategyKind::Threshold),
            "idle"          => Ok(StrategyKind::Idle),
            _ => Err(EngineError::UnknownStrategy(s.to_owned())),
        }
    }
}
