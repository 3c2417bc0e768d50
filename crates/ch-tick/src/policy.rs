//! Continuation policies: what to do with a tick after the service answers.

use ch_core::Tick;

use crate::SimulationResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Accept the submitted tick and move to the next index.
    Advance,
    /// Resubmit the same index with a regenerated recommendation set.
    Retry,
}

/// Decides between [`Continuation::Advance`] and [`Continuation::Retry`].
///
/// `attempt` is 0 for the first submission of `tick` and grows by one with
/// each retry.
pub trait ContinuationPolicy {
    fn decide(&self, tick: Tick, attempt: u32, result: &SimulationResult) -> Continuation;
}

impl<F> ContinuationPolicy for F
where
    F: Fn(Tick, u32, &SimulationResult) -> Continuation,
{
    fn decide(&self, tick: Tick, attempt: u32, result: &SimulationResult) -> Continuation {
        self(tick, attempt, result)
    }
}

/// Never retries.  The service has no documented retry trigger.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAdvance;

impl ContinuationPolicy for AlwaysAdvance {
    #[inline]
    fn decide(&self, _tick: Tick, _attempt: u32, _result: &SimulationResult) -> Continuation {
        Continuation::Advance
    }
}
