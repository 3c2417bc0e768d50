//! `ch-snapshot`: typed views over a raw simulation map snapshot.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`raw`]     | `MapSnapshot`: serde mirror of the service's JSON, all lenient |
//! | [`persona`] | `Persona` enum                                                  |
//! | [`model`]   | `Snapshot`, `Station`, `Customer`, `Zone`: the typed views     |
//! | [`summary`] | `SnapshotSummary`: persona and station counts for logging      |
//! | [`error`]   | `SnapshotError`, `SnapshotResult<T>`                            |
//!
//! # Failure policy
//!
//! Building a [`Snapshot`] never fails on bad record data.  Missing or
//! non-numeric fields take documented defaults (capacity 1, charge 0,
//! deadline 0, persona `Neutral`); records that are not objects at all are
//! skipped.  A customer id seen twice keeps its first occurrence in node
//! order.  The only error is a snapshot whose top level is not a JSON
//! object.

pub mod error;
pub mod model;
pub mod persona;
pub mod raw;
pub mod summary;

mod lenient;

#[cfg(test)]
mod tests;

pub use error::{SnapshotError, SnapshotResult};
pub use model::{Customer, Snapshot, Station, StationKind, Zone};
pub use persona::Persona;
pub use raw::{MapSnapshot, RawCustomer, RawNode, RawTarget};
pub use summary::{SnapshotSummary, ZoneStations};
