//! The `TickController` and its submit/advance loop.

use std::time::Instant;

use tracing::{debug, info, warn};

use ch_core::{RunConfig, SimRng, Tick};
use ch_engine::Strategy;
use ch_snapshot::Snapshot;

use crate::{
    AlwaysAdvance, Continuation, ContinuationPolicy, GameRequest, Gateway, SimulationResult,
    SubmissionReport, TickError, TickHistory, TickObserver, TickRecord, TickResult,
};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the controller is in the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Generating the candidate tick and assembling the payload.
    Building,
    /// Waiting on the gateway.
    Submitted,
    /// The last submission was accepted and the index moved on.
    Advance,
    /// The last submission will be regenerated at the same index.
    Retry,
}

// ── RunTotals ─────────────────────────────────────────────────────────────────

/// Metrics reported by the most recent successful submission.
///
/// Overwritten on every response; the final score of a run is whatever the
/// last tick reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunTotals {
    pub score:            f64,
    pub kwh_revenue:      f64,
    pub completion_score: f64,
    /// Entries in the last response's per-customer score list.
    pub customer_scores:  usize,
    /// Accepted ticks (history length).
    pub ticks_played:     usize,
    /// Gateway calls that succeeded, retries included.
    pub submissions:      u64,
}

impl RunTotals {
    fn record(&mut self, result: &SimulationResult) {
        self.score            = result.score;
        self.kwh_revenue      = result.kwh_revenue;
        self.completion_score = result.customer_completion_score;
        self.customer_scores  = result.details_customer_scores.len();
        self.submissions     += 1;
    }
}

// ── TickController ────────────────────────────────────────────────────────────

/// Drives a run against the simulation service, one tick at a time.
///
/// Each step builds a candidate [`TickRecord`] from the current snapshot,
/// submits it together with the whole accepted history, and lets the
/// continuation policy choose between advancing and retrying.  See the crate
/// docs for the state machine.
///
/// Create via [`TickControllerBuilder`][crate::TickControllerBuilder].
pub struct TickController<S: Strategy, G: Gateway, P: ContinuationPolicy = AlwaysAdvance> {
    pub config:      RunConfig,
    pub(crate) strategy: S,
    pub(crate) gateway:  G,
    pub(crate) policy:   P,
    pub(crate) snapshot: Snapshot,
    pub(crate) history:  TickHistory,
    pub(crate) tick:     Tick,
    pub(crate) attempt:  u32,
    pub(crate) phase:    Phase,
    pub(crate) totals:   RunTotals,
}

impl<S: Strategy, G: Gateway, P: ContinuationPolicy> TickController<S, G, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.end_tick()`.
    ///
    /// Returns the last reported totals.  A gateway failure stops the run
    /// immediately with [`TickError::Gateway`], which carries the totals of
    /// the last successful submission.
    pub fn run<O: TickObserver>(&mut self, observer: &mut O) -> TickResult<RunTotals> {
        let end = self.config.end_tick();
        info!(
            map = %self.config.map_name,
            strategy = self.strategy.name(),
            from = %self.tick,
            to = %end,
            "starting run"
        );
        while self.tick < end {
            self.step(observer)?;
        }
        observer.on_run_end(self.tick, &self.totals);
        info!(
            ticks = self.history.len(),
            submissions = self.totals.submissions,
            score = self.totals.score,
            "run finished"
        );
        Ok(self.totals.clone())
    }

    /// Accept exactly `n` more ticks from the current position (ignores
    /// `end_tick`).  Retries do not count towards `n`.
    pub fn run_ticks<O: TickObserver>(&mut self, n: u64, observer: &mut O) -> TickResult<RunTotals> {
        let target = self.tick + n;
        while self.tick < target {
            self.step(observer)?;
        }
        Ok(self.totals.clone())
    }

    /// One build/submit/decide cycle at the current tick index.
    pub fn step<O: TickObserver>(&mut self, observer: &mut O) -> TickResult<Continuation> {
        let now     = self.tick;
        let attempt = self.attempt;

        // ── Building ──────────────────────────────────────────────────────
        self.phase = Phase::Building;
        observer.on_tick_start(now, attempt);
        let candidate = self.build_candidate(now, attempt);
        let request = GameRequest {
            map_name:     self.config.map_name.clone(),
            play_to_tick: self.play_to_tick(),
            ticks:        self.history.with_candidate(&candidate),
        };

        // ── Submitted ─────────────────────────────────────────────────────
        self.phase = Phase::Submitted;
        let started = Instant::now();
        let result = match self.gateway.submit(&request) {
            Ok(result) => result,
            Err(err) => {
                warn!(tick = %now, attempt, error = %err, "submission failed; stopping run");
                return Err(TickError::Gateway {
                    tick:   now,
                    last:   self.totals.clone(),
                    source: Box::new(err),
                });
            }
        };
        let elapsed = started.elapsed();
        self.totals.record(&result);
        info!(
            tick = %now,
            attempt,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            score = result.score,
            kwh_revenue = result.kwh_revenue,
            completion = result.customer_completion_score,
            "tick submitted"
        );

        // ── Decide ────────────────────────────────────────────────────────
        let mut decision = self.policy.decide(now, attempt, &result);
        if decision == Continuation::Retry && attempt >= self.config.max_retries_per_tick {
            warn!(
                tick = %now,
                retries = attempt,
                "retry limit reached; advancing"
            );
            decision = Continuation::Advance;
        }

        observer.on_submitted(&SubmissionReport {
            tick: now,
            attempt,
            recommendations: candidate.len(),
            result: &result,
            elapsed,
            decision,
        });

        match result.map.as_ref() {
            Some(map) => self.snapshot = Snapshot::from_map(map),
            None      => debug!(tick = %now, "no updated map in response; keeping previous snapshot"),
        }

        match decision {
            Continuation::Advance => {
                self.history.push(candidate);
                self.totals.ticks_played = self.history.len();
                self.tick    = now + 1;
                self.attempt = 0;
                self.phase   = Phase::Advance;
            }
            Continuation::Retry => {
                self.attempt = attempt + 1;
                self.phase   = Phase::Retry;
                debug!(tick = %now, attempt = self.attempt, "retrying tick");
                observer.on_retry(now, self.attempt);
            }
        }
        Ok(decision)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The index the next step will build.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Retries already spent on the current index.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &TickHistory {
        &self.history
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn totals(&self) -> &RunTotals {
        &self.totals
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn into_gateway(self) -> G {
        self.gateway
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Regenerate the candidate for `now`.  The RNG depends only on the
    /// seed, the tick and the attempt, so replays are reproducible.
    fn build_candidate(&self, now: Tick, attempt: u32) -> TickRecord {
        let mut rng = SimRng::for_tick(self.config.seed ^ u64::from(attempt), now);
        let recommendations = self.strategy.recommend(&self.snapshot, now, &mut rng);
        TickRecord::new(now, &recommendations)
    }

    /// Omitted only on the very first submission of a run.
    fn play_to_tick(&self) -> Option<u64> {
        if self.tick == Tick::ZERO && self.attempt == 0 && self.history.is_empty() {
            None
        } else {
            Some(self.tick.0)
        }
    }
}
