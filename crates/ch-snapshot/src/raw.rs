//! Serde mirror of the map snapshot the simulation service exchanges.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "name": "Turbohill",
//!   "ticks": 288,
//!   "nodes": [
//!     {
//!       "id": "3,4",
//!       "zoneId": "z1",
//!       "target": { "Type": "GreenChargingStation" },
//!       "customers": [
//!         { "id": "c1", "persona": "Stressed", "chargeRemaining": 12.5,
//!           "maxCharge": 50.0, "departureTick": 40 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional and tolerant of wrong types: a wrong-typed field
//! reads as absent, and array elements that are not objects are dropped.
//! Defaults are applied later, when building the typed [`Snapshot`][crate::Snapshot].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;
use crate::{SnapshotError, SnapshotResult};

/// Root of a map snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapSnapshot {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Run length advertised by the map, if any.
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub ticks: Option<f64>,

    #[serde(deserialize_with = "lenient::seq")]
    pub nodes: Vec<RawNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNode {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    #[serde(deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub target: Option<RawTarget>,

    #[serde(deserialize_with = "lenient::seq")]
    pub customers: Vec<RawCustomer>,
}

/// What occupies a node.  Only the `Type` discriminator is consumed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTarget {
    #[serde(
        rename = "Type",
        alias = "type",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCustomer {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,

    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub charge_remaining: Option<f64>,

    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub max_charge: Option<f64>,

    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub departure_tick: Option<f64>,
}

impl MapSnapshot {
    /// Decode a snapshot from an already-parsed JSON value.
    ///
    /// Fails only if `value` is not a JSON object.
    pub fn from_value(value: Value) -> SnapshotResult<Self> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(SnapshotError::NotAnObject(kind_name(&other).to_owned())),
        }
    }

    /// Decode a snapshot from JSON text.
    pub fn from_json(text: &str) -> SnapshotResult<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// The advertised run length, if present and a non-negative integer.
    pub fn horizon(&self) -> Option<u64> {
        self.ticks.filter(|t| *t >= 0.0).map(|t| t.floor() as u64)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}
