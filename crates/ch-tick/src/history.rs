//! Append-only record of accepted ticks.

use ch_core::Tick;

use crate::TickRecord;

/// Every tick the service has accepted, in order.
///
/// The protocol resends the whole history with each request, so records are
/// never edited or dropped once pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickHistory {
    records: Vec<TickRecord>,
}

impl TickHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TickRecord) {
        debug_assert!(
            self.records.last().is_none_or(|last| last.tick < record.tick),
            "tick history must be strictly increasing"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_tick(&self) -> Option<Tick> {
        self.records.last().map(|r| r.tick)
    }

    /// The history followed by `candidate`, ready to submit.
    pub fn with_candidate(&self, candidate: &TickRecord) -> Vec<TickRecord> {
        let mut ticks = Vec::with_capacity(self.records.len() + 1);
        ticks.extend_from_slice(&self.records);
        ticks.push(candidate.clone());
        ticks
    }
}
