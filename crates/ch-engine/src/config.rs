//! Engine tuning knobs.

use serde::{Deserialize, Serialize};

use crate::{EngineError, EngineResult};

/// Numeric parameters of the urgency and selection heuristics.
///
/// Every field has a default so a TOML `[engine]` table may name only the
/// values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Assumed charge gained per tick at a station, as a fraction of capacity.
    pub charge_rate_per_tick: f64,
    /// Cost of one already-assigned customer, in distance units.
    pub load_weight:          f64,
    /// Scale applied to the y axis before computing distance.
    pub axis_weight:          f64,
    /// Upper bound of the random tie-break added to positive urgency.
    pub jitter_scale:         f64,
    /// Numerator of the `bonus / ticks_left` tie-break term.
    pub inverse_ticks_bonus:  f64,
    /// Chance that a relaxed green-preferring customer gets a top-up.
    pub top_up_probability:   f64,
    /// Top-ups are only offered with more than this many ticks left.
    pub slack_floor_ticks:    u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            charge_rate_per_tick: 0.1,
            load_weight:          2.0,
            axis_weight:          1.0,
            jitter_scale:         1.0e-3,
            inverse_ticks_bonus:  1.0e-2,
            top_up_probability:   0.1,
            slack_floor_ticks:    5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        let err = |msg: String| Err(EngineError::Config(msg));
        if !(self.charge_rate_per_tick.is_finite() && self.charge_rate_per_tick > 0.0) {
            return err(format!("charge_rate_per_tick must be positive, got {}", self.charge_rate_per_tick));
        }
        if !(self.axis_weight.is_finite() && self.axis_weight > 0.0) {
            return err(format!("axis_weight must be positive, got {}", self.axis_weight));
        }
        for (name, v) in [
            ("load_weight", self.load_weight),
            ("jitter_scale", self.jitter_scale),
            ("inverse_ticks_bonus", self.inverse_ticks_bonus),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return err(format!("{name} must be non-negative, got {v}"));
            }
        }
        if !(0.0..=1.0).contains(&self.top_up_probability) {
            return err(format!("top_up_probability must be in [0, 1], got {}", self.top_up_probability));
        }
        Ok(())
    }
}
