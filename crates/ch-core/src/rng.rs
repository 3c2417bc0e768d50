//! Injectable randomness for tie-break jitter and opportunistic decisions.
//!
//! # Determinism strategy
//!
//! Recommendation code never touches a global RNG.  It draws through the
//! [`RandomSource`] trait, which has two implementations:
//!
//! - [`SimRng`]: a `SmallRng` seeded per tick by
//!
//!     seed = global_seed XOR (tick * MIXING_CONSTANT)
//!
//!   so re-running the same snapshot at the same tick index with the same
//!   seed reproduces the batch exactly, independent of how many retries or
//!   earlier ticks consumed randomness.
//! - [`FixedRandom`]: a stub returning constant values, for tests that need
//!   exact urgency scores.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Tick;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The randomness a recommendation pass may consume.
pub trait RandomSource {
    /// A value uniformly distributed in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// `true` with probability `p` (clamped to [0, 1]).
    fn chance(&mut self, p: f64) -> bool;

    /// An index uniformly distributed in `0..len`.  `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded RNG used by real runs.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// RNG for one recommendation pass at `tick`.
    pub fn for_tick(global_seed: u64, tick: Tick) -> Self {
        let seed = global_seed ^ tick.0.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── FixedRandom ───────────────────────────────────────────────────────────────

/// Deterministic stub: every draw returns the configured constant.
///
/// `FixedRandom::default()` yields zero jitter, never fires a chance, and
/// always picks the first element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedRandom {
    pub unit:   f64,
    pub chance: bool,
    pub index:  usize,
}

impl FixedRandom {
    /// A stub whose `chance` always fires.
    pub fn always() -> Self {
        Self { chance: true, ..Self::default() }
    }
}

impl RandomSource for FixedRandom {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.unit
    }

    #[inline]
    fn chance(&mut self, _p: f64) -> bool {
        self.chance
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }
}
