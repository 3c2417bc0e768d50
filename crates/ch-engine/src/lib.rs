//! `ch-engine`: per-tick charging recommendation strategies.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                     |
//! |--------------------|--------------------------------------------------------------|
//! | [`recommendation`] | `Recommendation`: one customer → station → target triple    |
//! | [`policy`]         | `PersonaPolicy`, `ChargeFormula`, `PersonaTable`             |
//! | [`config`]         | `EngineConfig`: rates, weights, and tie-break magnitudes    |
//! | [`urgency`]        | `Assessment`: required charge, slack, and urgency score     |
//! | [`load`]           | `StationLoad`: per-pass station load counters               |
//! | [`strategy`]       | `Strategy` trait, `StrategyKind` selector                    |
//! | [`persona_aware`]  | `PersonaAwareStrategy`: the full urgency-driven engine      |
//! | [`threshold`]      | `ThresholdStrategy`: flat low-battery baseline              |
//! | [`idle`]           | `IdleStrategy`: never recommends                            |
//! | [`error`]          | `EngineError`, `EngineResult<T>`                             |
//!
//! # Determinism
//!
//! Strategies take `&self` and an injected [`RandomSource`][ch_core::RandomSource].
//! All per-pass state (station load) lives on the stack of one `recommend`
//! call, so the same snapshot, tick, and random source always produce the
//! same batch.

pub mod config;
pub mod error;
pub mod idle;
pub mod load;
pub mod persona_aware;
pub mod policy;
pub mod recommendation;
pub mod strategy;
pub mod threshold;
pub mod urgency;


pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use idle::IdleStrategy;
pub use load::StationLoad;
pub use persona_aware::{PassStats, PersonaAwareStrategy, Plan};
pub use policy::{ChargeFormula, PersonaEntry, PersonaPolicy, PersonaTable};
pub use recommendation::Recommendation;
pub use strategy::{Strategy, StrategyKind};
pub use threshold::ThresholdStrategy;
pub use urgency::Assessment;
