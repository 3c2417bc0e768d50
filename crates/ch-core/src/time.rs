//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  The simulation service
//! owns the mapping to wall-clock time; this side only ever needs ordering
//! and differences, so all deadline arithmetic is exact integer math.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Horizon used when neither the operator nor the map metadata names one.
pub const DEFAULT_TOTAL_TICKS: u64 = 288;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks remaining from `self` until `later`, or 0 if `later` has passed.
    #[inline]
    pub fn until(self, later: Tick) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration consumed by the tick controller.
///
/// Typically assembled by the application crate from its TOML file, CLI
/// flags and the map's own metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Name of the map the service should play.
    pub map_name: String,

    /// Total ticks to play.  The run stops once the tick index reaches it.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed and the same service responses always
    /// produce identical recommendation batches.
    pub seed: u64,

    /// Upper bound on consecutive retries of one tick index before the
    /// controller advances anyway.
    pub max_retries_per_tick: u32,
}

impl RunConfig {
    pub fn new(map_name: impl Into<String>) -> Self {
        Self {
            map_name:             map_name.into(),
            total_ticks:          DEFAULT_TOTAL_TICKS,
            seed:                 42,
            max_retries_per_tick: 3,
        }
    }

    /// Pick the run length: an explicit operator choice wins, then the map's
    /// advertised length, then [`DEFAULT_TOTAL_TICKS`].
    pub fn resolve_total_ticks(explicit: Option<u64>, advertised: Option<u64>) -> u64 {
        explicit.or(advertised).unwrap_or(DEFAULT_TOTAL_TICKS)
    }

    /// Reject a blank map name.  A zero-tick run is allowed and submits
    /// nothing.
    pub fn validate(&self) -> CoreResult<()> {
        if self.map_name.trim().is_empty() {
            return Err(CoreError::Config("map name must not be empty".into()));
        }
        Ok(())
    }

    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
