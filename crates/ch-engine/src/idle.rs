//! A strategy that never recommends anything.

use ch_core::{RandomSource, Tick};
use ch_snapshot::Snapshot;

use crate::{Recommendation, Strategy};

/// A [`Strategy`] that always returns an empty batch.
///
/// Useful as a baseline run (what does the map score with no intervention?)
/// and as a placeholder in controller tests.
pub struct IdleStrategy;

impl Strategy for IdleStrategy {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn recommend(
        &self,
        _snapshot: &Snapshot,
        _now:      Tick,
        _rng:      &mut dyn RandomSource,
    ) -> Vec<Recommendation> {
        vec![]
    }
}
