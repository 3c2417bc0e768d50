//! Per-pass station load counters.
//!
//! A fresh `StationLoad` is created at the start of every recommendation
//! pass and dropped at its end, so load never carries over between ticks.

use ch_core::NodeId;

#[cfg(not(feature = "fx-hash"))]
type LoadMap = std::collections::HashMap<NodeId, u32>;
#[cfg(feature = "fx-hash")]
type LoadMap = rustc_hash::FxHashMap<NodeId, u32>;

/// Number of customers routed to each station so far in this pass.
#[derive(Debug, Default, Clone)]
pub struct StationLoad {
    counts: LoadMap,
}

impl StationLoad {
    #[inline]
    pub fn get(&self, station: &NodeId) -> u32 {
        self.counts.get(station).copied().unwrap_or(0)
    }

    #[inline]
    pub fn increment(&mut self, station: &NodeId) {
        *self.counts.entry(station.clone()).or_insert(0) += 1;
    }

    /// Total assignments across all stations.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
