//! `ch-tick`: the tick controller and the simulation service protocol.
//!
//! # Tick state machine
//!
//! ```text
//! while tick < end_tick:
//!   ① Building  : strategy.recommend(snapshot, tick) → candidate TickRecord;
//!                  payload = full history + candidate.
//!   ② Submitted : gateway.submit(payload).  Any error ends the run.
//!                  Totals are overwritten with the reported values.
//!   ③ Decide    : policy.decide(result):
//!        Advance → history += candidate; tick += 1; snapshot = result.map
//!                  (or the previous snapshot if the service sent none).
//!        Retry   → snapshot = result.map; same tick, history untouched,
//!                  candidate regenerated on the next step.
//! ```
//!
//! Strictly sequential: tick N+1 is never built before tick N's response
//! arrives, because its recommendations depend on the updated snapshot.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ch_tick::{NoopObserver, TickControllerBuilder};
//!
//! let mut controller = TickControllerBuilder::new(config, strategy, gateway, snapshot)
//!     .build()?;
//! let totals = controller.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod history;
pub mod observer;
pub mod policy;
pub mod protocol;


pub use builder::TickControllerBuilder;
pub use controller::{Phase, RunTotals, TickController};
pub use error::{TickError, TickResult};
pub use gateway::Gateway;
pub use history::TickHistory;
pub use observer::{NoopObserver, SubmissionReport, TickObserver};
pub use policy::{AlwaysAdvance, Continuation, ContinuationPolicy};
pub use protocol::{
    ChargingRecommendation, CustomerRecommendation, CustomerScore, GameRequest, SimulationResult,
    TickRecord,
};
