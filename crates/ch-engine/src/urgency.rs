//! Urgency scoring.
//!
//! ```text
//! required   = max(0, full_target - soc)
//! ticks_left = departure - now                       (≥ 1 for eligible customers)
//! min_ticks  = max(1, ceil(required / charge_rate))
//! base       = max(0, low_threshold - soc) + max(0, min_ticks - ticks_left)
//! urgency    = base + bonus / ticks_left + jitter    if base > 0
//!            = 0                                     otherwise
//! ```
//!
//! The tie-break terms only ride on top of a positive base, so a customer
//! with enough charge and enough time scores exactly zero.

use ch_core::{RandomSource, Tick};
use ch_snapshot::Customer;

use crate::{EngineConfig, PersonaPolicy};

/// Absorbs float noise such as `0.7 / 0.1 = 6.999…` before rounding up.
const CEIL_EPSILON: f64 = 1.0e-9;

/// The deterministic part of one customer's urgency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment {
    pub soc:            f64,
    pub required:       f64,
    pub ticks_left:     u64,
    pub min_ticks:      u64,
    /// Threshold deficit plus time deficit; no tie-break terms.
    pub base:           f64,
}

impl Assessment {
    /// Assess an eligible customer at `now`.
    pub fn of(customer: &Customer, policy: &PersonaPolicy, now: Tick, config: &EngineConfig) -> Assessment {
        let soc = customer.soc();
        let required = (policy.full_charge_target - soc).max(0.0);
        let ticks_left = now.until(customer.departure_tick).max(1);
        let min_ticks = ((required / config.charge_rate_per_tick) - CEIL_EPSILON).ceil().max(1.0) as u64;

        let threshold_deficit = (policy.low_threshold - soc).max(0.0);
        let time_deficit = min_ticks.saturating_sub(ticks_left) as f64;

        Assessment {
            soc,
            required,
            ticks_left,
            min_ticks,
            base: threshold_deficit + time_deficit,
        }
    }

    /// Full urgency score, drawing jitter from `rng` only when the base is
    /// positive.
    pub fn urgency(&self, config: &EngineConfig, rng: &mut dyn RandomSource) -> f64 {
        if self.base <= 0.0 {
            return 0.0;
        }
        let bonus = config.inverse_ticks_bonus / self.ticks_left as f64;
        let jitter = config.jitter_scale * rng.unit();
        self.base + bonus + jitter
    }
}
