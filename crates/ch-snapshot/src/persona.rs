//! Customer behavioral categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The persona a customer reports.  Drives charging thresholds and station
/// preference through the engine's persona policy table.
///
/// Names the service does not document parse as [`Persona::Other`] so they
/// survive into logs; the policy table maps them to its default entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Persona {
    CostSensitive,
    EcoConscious,
    Stressed,
    DislikesDriving,
    Neutral,
    Other(String),
}

impl Persona {
    /// Persona assumed when a customer record omits one.
    pub const DEFAULT: Persona = Persona::Neutral;

    pub fn parse(raw: &str) -> Persona {
        match raw.trim() {
            "CostSensitive"   => Persona::CostSensitive,
            "EcoConscious"    => Persona::EcoConscious,
            "Stressed"        => Persona::Stressed,
            "DislikesDriving" => Persona::DislikesDriving,
            "Neutral"         => Persona::Neutral,
            other             => Persona::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Persona::CostSensitive   => "CostSensitive",
            Persona::EcoConscious    => "EcoConscious",
            Persona::Stressed        => "Stressed",
            Persona::DislikesDriving => "DislikesDriving",
            Persona::Neutral         => "Neutral",
            Persona::Other(name)     => name,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::DEFAULT
    }
}

impl From<String> for Persona {
    fn from(raw: String) -> Self {
        Persona::parse(&raw)
    }
}

impl From<Persona> for String {
    fn from(p: Persona) -> Self {
        p.as_str().to_owned()
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
