//! `ch-core`: foundational types for the charge-router workspace.
//!
//! This crate is a dependency of every other `ch-*` crate.  It intentionally
//! has no `ch-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `CustomerId`, `ZoneId`                      |
//! | [`geo`]         | `Coord`, location-id parsing, weighted distance       |
//! | [`time`]        | `Tick`, `RunConfig`                                   |
//! | [`rng`]         | `RandomSource` trait, `SimRng`, `FixedRandom`         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `ch-snapshot` and `ch-tick`.                   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coord, UNRESOLVED_DISTANCE};
pub use ids::{CustomerId, NodeId, ZoneId};
pub use rng::{FixedRandom, RandomSource, SimRng};
pub use time::{DEFAULT_TOTAL_TICKS, RunConfig, Tick};
