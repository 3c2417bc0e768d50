//! The urgency-driven, persona-aware recommendation engine.
//!
//! # One pass
//!
//! ```text
//! ① Stations  : no charging stations → empty batch.
//! ② Eligible  : customers with departure > now.
//! ③ Order     : earliest departure first (stable), so urgent customers
//!                claim preferred stations before load builds up.
//! ④ Per customer:
//!      policy  = table[persona]  (default entry for unknown personas)
//!      urgency = Assessment::of(..).urgency(..)
//!      urgency > 0  → pick station (zone pool → green narrowing →
//!                     min distance + load_weight·load), load += 1,
//!                     target from the persona's ChargeFormula
//!      urgency == 0 → green-preferring persona with slack: small chance
//!                     of a full top-up at a random green station
//! ```

use ch_core::{Coord, RandomSource, Tick};
use ch_snapshot::{Customer, Snapshot, Station};

use crate::{Assessment, EngineConfig, PersonaPolicy, PersonaTable, Recommendation, StationLoad, Strategy};

/// Counters from one pass, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub eligible: usize,
    pub routed:   usize,
    pub top_ups:  usize,
}

/// Output of [`PersonaAwareStrategy::plan`].
#[derive(Debug, Default)]
pub struct Plan {
    pub recommendations: Vec<Recommendation>,
    /// Station load at the end of the pass.
    pub load:            StationLoad,
    pub stats:           PassStats,
}

pub struct PersonaAwareStrategy {
    config: EngineConfig,
    table:  PersonaTable,
}

impl PersonaAwareStrategy {
    pub fn new(config: EngineConfig, table: PersonaTable) -> Self {
        Self { config, table }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &PersonaTable {
        &self.table
    }

    /// Run one pass and keep the intermediate state.
    pub fn plan(&self, snapshot: &Snapshot, now: Tick, rng: &mut dyn RandomSource) -> Plan {
        let mut plan = Plan::default();
        if snapshot.stations.is_empty() {
            return plan;
        }

        let mut queue: Vec<&Customer> = snapshot
            .customers
            .iter()
            .filter(|c| c.is_eligible(now))
            .collect();
        queue.sort_by_key(|c| c.departure_tick);
        plan.stats.eligible = queue.len();

        for customer in queue {
            let policy = self.table.policy(&customer.persona);
            let assessment = Assessment::of(customer, policy, now, &self.config);
            let urgency = assessment.urgency(&self.config, rng);

            if urgency > 0.0 {
                let Some(station) = self.select_station(snapshot, customer, policy, &plan.load) else {
                    continue;
                };
                plan.load.increment(&station.id);
                let charge_to = policy.formula.target(
                    assessment.soc,
                    policy.full_charge_target,
                    urgency,
                    assessment.ticks_left,
                    self.config.charge_rate_per_tick,
                );
                plan.recommendations.push(Recommendation::new(customer.id.clone(), station.id.clone(), charge_to));
                plan.stats.routed += 1;
            } else if let Some(station) = self.offer_top_up(snapshot, policy, &assessment, rng) {
                plan.load.increment(&station.id);
                plan.recommendations.push(Recommendation::new(
                    customer.id.clone(),
                    station.id.clone(),
                    policy.full_charge_target,
                ));
                plan.stats.top_ups += 1;
            }
        }

        plan
    }

    /// Best station for an urgent customer, or `None` if the map has none.
    ///
    /// Pool: same-zone stations if any, else every station; narrowed to green
    /// stations when the persona prefers them and the pool has some.  Ties on
    /// the weighted score keep pool order.
    pub fn select_station<'s>(
        &self,
        snapshot: &'s Snapshot,
        customer: &Customer,
        policy:   &PersonaPolicy,
        load:     &StationLoad,
    ) -> Option<&'s Station> {
        let mut pool: Vec<&Station> = snapshot.stations.iter().filter(|s| s.zone == customer.zone).collect();
        if pool.is_empty() {
            pool = snapshot.stations.iter().collect();
        }
        if policy.prefers_green && pool.iter().any(|s| s.is_green()) {
            pool.retain(|s| s.is_green());
        }

        pool.into_iter()
            .map(|s| (self.station_score(customer, s, load), s))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, s)| s)
    }

    /// Distance plus the load penalty; lower is better.
    #[inline]
    pub fn station_score(&self, customer: &Customer, station: &Station, load: &StationLoad) -> f64 {
        let distance = Coord::distance_or_sentinel(customer.location, station.location, self.config.axis_weight);
        distance + self.config.load_weight * f64::from(load.get(&station.id))
    }

    /// Opportunistic full charge for a relaxed green-preferring customer.
    fn offer_top_up<'s>(
        &self,
        snapshot:   &'s Snapshot,
        policy:     &PersonaPolicy,
        assessment: &Assessment,
        rng:        &mut dyn RandomSource,
    ) -> Option<&'s Station> {
        if !policy.prefers_green || assessment.ticks_left <= self.config.slack_floor_ticks {
            return None;
        }
        let green: Vec<&Station> = snapshot.green_stations().collect();
        if green.is_empty() || !rng.chance(self.config.top_up_probability) {
            return None;
        }
        let pick = rng.index(green.len()).min(green.len() - 1);
        Some(green[pick])
    }
}

impl Strategy for PersonaAwareStrategy {
    fn name(&self) -> &'static str {
        "persona_aware"
    }

    fn recommend(&self, snapshot: &Snapshot, now: Tick, rng: &mut dyn RandomSource) -> Vec<Recommendation> {
        let plan = self.plan(snapshot, now, rng);
        tracing::debug!(
            tick = now.0,
            stations = snapshot.stations.len(),
            eligible = plan.stats.eligible,
            routed = plan.stats.routed,
            top_ups = plan.stats.top_ups,
            "recommendation pass"
        );
        plan.recommendations
    }
}
