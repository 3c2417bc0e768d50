//! Fluent builder for constructing a [`TickController`].

use ch_core::{RunConfig, Tick};
use ch_engine::Strategy;
use ch_snapshot::Snapshot;

use crate::{
    AlwaysAdvance, ContinuationPolicy, Gateway, Phase, RunTotals, TickController, TickHistory,
    TickResult,
};

/// Fluent builder for [`TickController<S, G, P>`].
///
/// # Required inputs
///
/// - [`RunConfig`]: map name, total ticks, seed, retry cap
/// - `S: Strategy`: the recommendation policy
/// - `G: Gateway`: the simulation service (real or scripted)
/// - [`Snapshot`]: the initial map state
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default          |
/// |------------------|------------------|
/// | `.policy(p)`     | [`AlwaysAdvance`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = TickControllerBuilder::new(config, strategy, gateway, snapshot)
///     .policy(|_tick, attempt, result: &SimulationResult| {
///         if result.score < 0.0 && attempt == 0 { Continuation::Retry } else { Continuation::Advance }
///     })
///     .build()?;
/// controller.run(&mut NoopObserver)?;
/// ```
pub struct TickControllerBuilder<S: Strategy, G: Gateway, P: ContinuationPolicy = AlwaysAdvance> {
    config:   RunConfig,
    strategy: S,
    gateway:  G,
    policy:   P,
    snapshot: Snapshot,
}

impl<S: Strategy, G: Gateway> TickControllerBuilder<S, G, AlwaysAdvance> {
    /// Create a builder with all required inputs.
    pub fn new(config: RunConfig, strategy: S, gateway: G, snapshot: Snapshot) -> Self {
        Self { config, strategy, gateway, policy: AlwaysAdvance, snapshot }
    }
}

impl<S: Strategy, G: Gateway, P: ContinuationPolicy> TickControllerBuilder<S, G, P> {
    /// Replace the continuation policy.
    pub fn policy<Q: ContinuationPolicy>(self, policy: Q) -> TickControllerBuilder<S, G, Q> {
        TickControllerBuilder {
            config:   self.config,
            strategy: self.strategy,
            gateway:  self.gateway,
            policy,
            snapshot: self.snapshot,
        }
    }

    /// Validate the configuration and return a controller positioned at
    /// tick 0 with an empty history.
    pub fn build(self) -> TickResult<TickController<S, G, P>> {
        self.config.validate()?;

        Ok(TickController {
            config:   self.config,
            strategy: self.strategy,
            gateway:  self.gateway,
            policy:   self.policy,
            snapshot: self.snapshot,
            history:  TickHistory::new(),
            tick:     Tick::ZERO,
            attempt:  0,
            phase:    Phase::Building,
            totals:   RunTotals::default(),
        })
    }
}
