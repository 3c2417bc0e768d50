//! JSON wire types exchanged with the simulation service.
//!
//! # Request
//!
//! ```json
//! { "mapName": "Turbohill", "playToTick": 3,
//!   "ticks": [ { "tick": 0, "customerRecommendations": [
//!       { "customerId": "c1",
//!         "chargingRecommendations": [ { "nodeId": "3,4", "chargeTo": 0.8 } ] } ] } ] }
//! ```
//!
//! # Response
//!
//! ```json
//! { "score": 120.5, "kwhRevenue": 80.0, "customerCompletionScore": 40.5,
//!   "detailsCustomerScores": [ { "customerId": "c1", "score": 3.0 } ],
//!   "map": { … updated snapshot … } }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use ch_core::{CustomerId, NodeId, Tick};
use ch_engine::Recommendation;
use ch_snapshot::MapSnapshot;

// ── Request ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    pub map_name:     String,
    /// Omitted on the very first submission of a run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_to_tick: Option<u64>,
    /// Every accepted tick so far, followed by the candidate tick.
    pub ticks:        Vec<TickRecord>,
}

/// What was (or is about to be) submitted for one tick index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickRecord {
    pub tick:                     Tick,
    pub customer_recommendations: Vec<CustomerRecommendation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecommendation {
    pub customer_id:              CustomerId,
    pub charging_recommendations: Vec<ChargingRecommendation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingRecommendation {
    pub node_id:   NodeId,
    pub charge_to: f64,
}

impl TickRecord {
    pub fn new(tick: Tick, recommendations: &[Recommendation]) -> Self {
        let customer_recommendations = recommendations
            .iter()
            .map(|r| CustomerRecommendation {
                customer_id:              r.customer.clone(),
                charging_recommendations: vec![ChargingRecommendation {
                    node_id:   r.station.clone(),
                    charge_to: r.charge_to,
                }],
            })
            .collect();
        Self { tick, customer_recommendations }
    }

    /// Flatten back into engine recommendations (one per charging entry).
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.customer_recommendations
            .iter()
            .flat_map(|c| {
                c.charging_recommendations
                    .iter()
                    .map(|r| Recommendation::new(c.customer_id.clone(), r.node_id.clone(), r.charge_to))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.customer_recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customer_recommendations.is_empty()
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// The service's verdict on a submission.  Missing metrics read as 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationResult {
    pub score:                     f64,
    pub kwh_revenue:               f64,
    pub customer_completion_score: f64,
    pub details_customer_scores:   Vec<CustomerScore>,
    /// Updated snapshot.  `null`, absent, or non-object maps read as `None`.
    #[serde(deserialize_with = "map_or_none", skip_serializing_if = "Option::is_none")]
    pub map:                       Option<MapSnapshot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerScore {
    pub customer_id: CustomerId,
    pub score:       f64,
}

impl SimulationResult {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

fn map_or_none<'de, D>(de: D) -> Result<Option<MapSnapshot>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.and_then(|v| MapSnapshot::from_value(v).ok()))
}
