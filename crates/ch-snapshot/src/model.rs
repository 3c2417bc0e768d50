//! Typed per-tick views: stations, customers, zones, and location lookup.
//!
//! Views are rebuilt from scratch for every snapshot; only the identifiers
//! are stable across ticks.

use std::collections::{BTreeMap, HashMap, HashSet};

use ch_core::{Coord, CustomerId, NodeId, Tick, ZoneId};

use crate::{MapSnapshot, Persona, RawCustomer};

/// Capacity assumed when `maxCharge` is missing, non-numeric, or `<= 0`.
pub const DEFAULT_MAX_CHARGE: f64 = 1.0;
/// Charge assumed when `chargeRemaining` is missing or non-numeric.
pub const DEFAULT_CHARGE: f64 = 0.0;
/// Deadline assumed when `departureTick` is missing, which makes the
/// customer ineligible from tick 0 onward.
pub const DEFAULT_DEPARTURE: Tick = Tick(0);

// ── Station ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StationKind {
    Standard,
    /// Renewable-powered station preferred by eco-conscious customers.
    Green,
}

impl StationKind {
    /// Map a node's `target.Type` to a station kind.  Non-charging targets
    /// return `None`.
    pub fn from_target(kind: &str) -> Option<StationKind> {
        match kind {
            "ChargingStation"      => Some(StationKind::Standard),
            "GreenChargingStation" => Some(StationKind::Green),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub id:       NodeId,
    pub kind:     StationKind,
    pub zone:     ZoneId,
    pub location: Option<Coord>,
}

impl Station {
    #[inline]
    pub fn is_green(&self) -> bool {
        self.kind == StationKind::Green
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub id:               CustomerId,
    pub persona:          Persona,
    pub charge_remaining: f64,
    /// Always `> 0` after defaulting.
    pub max_charge:       f64,
    pub departure_tick:   Tick,
    /// Node the customer currently occupies.
    pub node:             NodeId,
    pub zone:             ZoneId,
    pub location:         Option<Coord>,
}

impl Customer {
    /// State of charge as a fraction of capacity, clamped to `[0, 1]`.
    #[inline]
    pub fn soc(&self) -> f64 {
        (self.charge_remaining / self.max_charge).clamp(0.0, 1.0)
    }

    /// `true` while the customer's departure is still in the future.
    #[inline]
    pub fn is_eligible(&self, now: Tick) -> bool {
        self.departure_tick > now
    }

    /// Build a customer from its raw record, applying field defaults.
    ///
    /// Returns the customer and whether any default was substituted.
    fn from_raw(raw: &RawCustomer, node: &NodeId, zone: &ZoneId, location: Option<Coord>) -> (Customer, bool) {
        let mut defaulted = false;

        // Unknown capacity means the charge reading cannot be trusted either.
        let (max_charge, charge_remaining) = match raw.max_charge {
            Some(max) if max > 0.0 => {
                let charge = raw.charge_remaining.unwrap_or_else(|| {
                    defaulted = true;
                    DEFAULT_CHARGE
                });
                (max, charge.max(0.0))
            }
            _ => {
                defaulted = true;
                (DEFAULT_MAX_CHARGE, DEFAULT_CHARGE)
            }
        };

        let departure_tick = match raw.departure_tick {
            Some(t) if t >= 0.0 => Tick(t.floor() as u64),
            _ => {
                defaulted = true;
                DEFAULT_DEPARTURE
            }
        };

        let persona = raw.persona.as_deref().map(Persona::parse).unwrap_or_default();

        let customer = Customer {
            id: CustomerId::new(raw.id.clone().unwrap_or_default()),
            persona,
            charge_remaining,
            max_charge,
            departure_tick,
            node: node.clone(),
            zone: zone.clone(),
            location,
        };
        (customer, defaulted)
    }
}

// ── Zone ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Zone {
    pub id:       ZoneId,
    pub nodes:    Vec<NodeId>,
    pub stations: Vec<NodeId>,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Typed views over one [`MapSnapshot`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub name:      Option<String>,
    /// Run length advertised by the map metadata.
    pub horizon:   Option<u64>,
    /// Charging stations only, in node order.
    pub stations:  Vec<Station>,
    /// Every customer on every node, in node order.
    pub customers: Vec<Customer>,
    /// Zones in first-seen order.
    pub zones:     Vec<Zone>,
    locations:     HashMap<NodeId, Coord>,
}

impl Snapshot {
    /// Build the typed views.  Never fails; see the crate docs for the
    /// default policy.
    pub fn from_map(map: &MapSnapshot) -> Snapshot {
        let mut stations  = Vec::new();
        let mut customers = Vec::new();
        let mut locations = HashMap::with_capacity(map.nodes.len());
        let mut zone_index: BTreeMap<ZoneId, usize> = BTreeMap::new();
        let mut zones: Vec<Zone> = Vec::new();
        let mut seen: HashSet<CustomerId> = HashSet::new();
        let mut defaulted = 0usize;
        let mut skipped = 0usize;

        for node in &map.nodes {
            let node_id = NodeId::new(node.id.clone().unwrap_or_default());
            let zone_id = ZoneId::new(node.zone_id.clone().unwrap_or_default());
            let location = Coord::parse(node_id.as_str());
            if let Some(coord) = location {
                locations.insert(node_id.clone(), coord);
            }

            let zone_slot = *zone_index.entry(zone_id.clone()).or_insert_with(|| {
                zones.push(Zone { id: zone_id.clone(), ..Zone::default() });
                zones.len() - 1
            });
            if !node_id.is_empty() {
                zones[zone_slot].nodes.push(node_id.clone());
            }

            let kind = node
                .target
                .as_ref()
                .and_then(|t| t.kind.as_deref())
                .and_then(StationKind::from_target);
            if let Some(kind) = kind {
                if node_id.is_empty() {
                    skipped += 1;
                } else {
                    zones[zone_slot].stations.push(node_id.clone());
                    stations.push(Station {
                        id:   node_id.clone(),
                        kind,
                        zone: zone_id.clone(),
                        location,
                    });
                }
            }

            for raw in &node.customers {
                if raw.id.as_deref().is_none_or(str::is_empty) {
                    skipped += 1;
                    continue;
                }
                let (customer, was_defaulted) = Customer::from_raw(raw, &node_id, &zone_id, location);
                // First occurrence wins; a customer is routed at most once per pass.
                if !seen.insert(customer.id.clone()) {
                    skipped += 1;
                    continue;
                }
                defaulted += usize::from(was_defaulted);
                customers.push(customer);
            }
        }

        if defaulted > 0 || skipped > 0 {
            tracing::debug!(defaulted, skipped, "snapshot records repaired or dropped");
        }

        Snapshot {
            name: map.name.clone(),
            horizon: map.horizon(),
            stations,
            customers,
            zones,
            locations,
        }
    }

    /// Coordinates of a node, if its identifier parsed.
    ///
    /// Identifiers not present in the snapshot are parsed on demand.
    pub fn location(&self, node: &NodeId) -> Option<Coord> {
        self.locations
            .get(node)
            .copied()
            .or_else(|| Coord::parse(node.as_str()))
    }

    /// Stations whose zone is `zone`, in snapshot order.
    pub fn stations_in_zone<'a, 'z>(&'a self, zone: &'z ZoneId) -> impl Iterator<Item = &'a Station> + use<'a, 'z> {
        self.stations.iter().filter(move |s| &s.zone == zone)
    }

    pub fn green_stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter().filter(|s| s.is_green())
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }
}
