//! Flat low-battery baseline.

use ch_core::{RandomSource, Tick};
use ch_snapshot::Snapshot;

use crate::{PersonaTable, Recommendation, Strategy};

/// State of charge below which the baseline routes a customer.
pub const FLAT_THRESHOLD: f64 = 0.5;

/// Sends every eligible customer below [`FLAT_THRESHOLD`] to the first
/// station of its zone (else the first station on the map), charging to its
/// persona's full target.  Ignores load, distance, and deadlines beyond
/// eligibility.
pub struct ThresholdStrategy {
    table: PersonaTable,
}

impl ThresholdStrategy {
    pub fn new(table: PersonaTable) -> Self {
        Self { table }
    }
}

impl Strategy for ThresholdStrategy {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn recommend(&self, snapshot: &Snapshot, now: Tick, _rng: &mut dyn RandomSource) -> Vec<Recommendation> {
        let Some(fallback) = snapshot.stations.first() else {
            return vec![];
        };

        snapshot
            .customers
            .iter()
            .filter(|c| c.is_eligible(now) && c.soc() < FLAT_THRESHOLD)
            .map(|c| {
                let station = snapshot.stations_in_zone(&c.zone).next().unwrap_or(fallback);
                let target = self.table.policy(&c.persona).full_charge_target;
                Recommendation::new(c.id.clone(), station.id.clone(), target)
            })
            .collect()
    }
}
