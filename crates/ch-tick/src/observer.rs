//! Controller observer trait for progress reporting and run reports.

use std::time::Duration;

use ch_core::Tick;

use crate::{Continuation, RunTotals, SimulationResult};

/// Everything known about one submission once the service has answered.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionReport<'a> {
    pub tick:            Tick,
    /// 0 for the first submission of `tick`.
    pub attempt:         u32,
    /// Customers in the candidate tick.
    pub recommendations: usize,
    pub result:          &'a SimulationResult,
    /// Wall time spent inside the gateway call.
    pub elapsed:         Duration,
    /// What the controller did next.
    pub decision:        Continuation,
}

/// Callbacks invoked by [`TickController::run`][crate::TickController::run]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl TickObserver for ScorePrinter {
///     fn on_submitted(&mut self, report: &SubmissionReport<'_>) {
///         println!("{}: score {}", report.tick, report.result.score);
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called before the candidate for `tick` is built.
    fn on_tick_start(&mut self, _tick: Tick, _attempt: u32) {}

    /// Called after every successful gateway call.
    fn on_submitted(&mut self, _report: &SubmissionReport<'_>) {}

    /// Called when `tick` will be resubmitted as attempt `attempt`.
    fn on_retry(&mut self, _tick: Tick, _attempt: u32) {}

    /// Called once after the final tick, with the last reported totals.
    fn on_run_end(&mut self, _final_tick: Tick, _totals: &RunTotals) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}

impl<O: TickObserver + ?Sized> TickObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick, attempt: u32) {
        (**self).on_tick_start(tick, attempt);
    }

    fn on_submitted(&mut self, report: &SubmissionReport<'_>) {
        (**self).on_submitted(report);
    }

    fn on_retry(&mut self, tick: Tick, attempt: u32) {
        (**self).on_retry(tick, attempt);
    }

    fn on_run_end(&mut self, final_tick: Tick, totals: &RunTotals) {
        (**self).on_run_end(final_tick, totals);
    }
}
