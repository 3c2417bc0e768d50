//! Persona policy table.
//!
//! The table is data: each persona maps to a low-battery threshold, a full
//! charge target, a target-charge formula, and a green-station preference.
//! Personas absent from the table (including names the service invents
//! later) resolve to the table's default entry.
//!
//! # TOML form
//!
//! ```toml
//! [[personas]]
//! persona            = "Stressed"
//! low_threshold      = 0.6
//! full_charge_target = 0.8
//! formula            = "threshold"
//!
//! [[personas]]
//! persona            = "CostSensitive"
//! low_threshold      = 0.2
//! full_charge_target = 0.6
//! formula            = { partial = { step = 0.5 } }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ch_snapshot::Persona;

use crate::{EngineError, EngineResult};

/// Floor on the fraction of the remaining gap a [`ChargeFormula::Scaled`]
/// target covers, so slack customers still receive a useful charge.
pub const MIN_SCALED_FRACTION: f64 = 0.5;

// ── ChargeFormula ─────────────────────────────────────────────────────────────

/// How far to charge a routed customer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeFormula {
    /// Charge `step` above the current level, capped at the full target.
    Partial { step: f64 },
    /// Always charge to 100 %.
    Full,
    /// Always charge to the persona's full target.
    Threshold,
    /// Cover a share of the gap to the full target that grows with urgency
    /// and shrinks with time left.
    Scaled,
}

impl ChargeFormula {
    /// Target state of charge in `[0, 1]`.
    ///
    /// `ticks_left` is at least 1 for every eligible customer.
    pub fn target(self, soc: f64, full: f64, urgency: f64, ticks_left: u64, charge_rate: f64) -> f64 {
        let target = match self {
            ChargeFormula::Partial { step } => (soc + step).min(full),
            ChargeFormula::Full             => 1.0,
            ChargeFormula::Threshold        => full,
            ChargeFormula::Scaled => {
                let gap = (full - soc).max(0.0);
                let slack = ticks_left as f64 * charge_rate;
                let pressure = if urgency + slack > 0.0 { urgency / (urgency + slack) } else { 1.0 };
                (soc + gap * pressure.max(MIN_SCALED_FRACTION)).min(full)
            }
        };
        target.clamp(0.0, 1.0)
    }
}

// ── PersonaPolicy ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonaPolicy {
    /// Below this state of charge the customer is urgent.
    pub low_threshold:      f64,
    /// The level the customer considers "charged".
    pub full_charge_target: f64,
    pub formula:            ChargeFormula,
    /// Route to green stations when the candidate pool has any.
    #[serde(default)]
    pub prefers_green:      bool,
}

impl PersonaPolicy {
    pub const fn new(low_threshold: f64, full_charge_target: f64, formula: ChargeFormula) -> Self {
        Self { low_threshold, full_charge_target, formula, prefers_green: false }
    }

    pub const fn preferring_green(mut self) -> Self {
        self.prefers_green = true;
        self
    }

    fn validate(&self, persona: &str) -> EngineResult<()> {
        let invalid = |reason: String| EngineError::InvalidPolicy { persona: persona.to_owned(), reason };
        for (name, v) in [("low_threshold", self.low_threshold), ("full_charge_target", self.full_charge_target)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(invalid(format!("{name} {v} is outside [0, 1]")));
            }
        }
        if let ChargeFormula::Partial { step } = self.formula {
            if !(step > 0.0 && step <= 1.0) {
                return Err(invalid(format!("partial step {step} is outside (0, 1]")));
            }
        }
        Ok(())
    }
}

/// The policy used for personas the table does not name.
pub const NEUTRAL_POLICY: PersonaPolicy = PersonaPolicy::new(0.4, 0.9, ChargeFormula::Scaled);

// ── PersonaTable ──────────────────────────────────────────────────────────────

/// One row of a persona table override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonaEntry {
    pub persona: Persona,
    #[serde(flatten)]
    pub policy:  PersonaPolicy,
}

/// Persona → policy lookup with a required default entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonaTable {
    entries: HashMap<Persona, PersonaPolicy>,
    default: PersonaPolicy,
}

impl PersonaTable {
    /// A table containing only `default`.
    pub fn with_default(default: PersonaPolicy) -> Self {
        Self { entries: HashMap::new(), default }
    }

    /// Insert or replace the policy for `persona`.
    pub fn insert(&mut self, persona: Persona, policy: PersonaPolicy) -> &mut Self {
        self.entries.insert(persona, policy);
        self
    }

    /// Apply overrides on top of the current table, validating each one.
    pub fn apply(&mut self, overrides: &[PersonaEntry]) -> EngineResult<()> {
        for entry in overrides {
            entry.policy.validate(entry.persona.as_str())?;
            self.entries.insert(entry.persona.clone(), entry.policy);
        }
        Ok(())
    }

    /// Replace the fallback entry.
    pub fn set_default(&mut self, policy: PersonaPolicy) -> EngineResult<()> {
        policy.validate("<default>")?;
        self.default = policy;
        Ok(())
    }

    /// Policy for `persona`, or the default entry.  Never fails.
    #[inline]
    pub fn policy(&self, persona: &Persona) -> &PersonaPolicy {
        self.entries.get(persona).unwrap_or(&self.default)
    }

    pub fn default_policy(&self) -> &PersonaPolicy {
        &self.default
    }

    /// `true` if `persona` has its own entry.
    pub fn contains(&self, persona: &Persona) -> bool {
        self.entries.contains_key(persona)
    }
}

impl Default for PersonaTable {
    /// The stock table:
    ///
    /// | Persona         | Low  | Full | Formula          | Green |
    /// |-----------------|------|------|------------------|-------|
    /// | CostSensitive   | 0.20 | 0.60 | partial (+0.5)   |       |
    /// | EcoConscious    | 0.40 | 1.00 | full             | yes   |
    /// | Stressed        | 0.60 | 0.80 | threshold        |       |
    /// | DislikesDriving | 0.50 | 0.90 | scaled           |       |
    /// | Neutral         | 0.40 | 0.90 | scaled           |       |
    /// | *default*       | 0.40 | 0.90 | scaled           |       |
    fn default() -> Self {
        let mut table = PersonaTable::with_default(NEUTRAL_POLICY);
        table
            .insert(Persona::CostSensitive, PersonaPolicy::new(0.2, 0.6, ChargeFormula::Partial { step: 0.5 }))
            .insert(Persona::EcoConscious, PersonaPolicy::new(0.4, 1.0, ChargeFormula::Full).preferring_green())
            .insert(Persona::Stressed, PersonaPolicy::new(0.6, 0.8, ChargeFormula::Threshold))
            .insert(Persona::DislikesDriving, PersonaPolicy::new(0.5, 0.9, ChargeFormula::Scaled))
            .insert(Persona::Neutral, NEUTRAL_POLICY);
        table
    }
}
