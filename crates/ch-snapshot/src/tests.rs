//! Unit tests for ch-snapshot.

use serde_json::json;

use crate::{MapSnapshot, Snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot(value: serde_json::Value) -> Snapshot {
    Snapshot::from_map(&MapSnapshot::from_value(value).unwrap())
}

fn sample() -> Snapshot {
    snapshot(json!({
        "name": "Turbohill",
        "ticks": 96,
        "nodes": [
            { "id": "0,0", "zoneId": "north", "target": { "Type": "ChargingStation" } },
            { "id": "5,0", "zoneId": "north", "target": { "Type": "GreenChargingStation" } },
            { "id": "9,9", "zoneId": "south", "target": { "Type": "House" },
              "customers": [
                  { "id": "c1", "persona": "Stressed", "chargeRemaining": 10.0,
                    "maxCharge": 100.0, "departureTick": 10 },
                  { "id": "c2", "persona": "EcoConscious", "chargeRemaining": 30.0,
                    "maxCharge": 60.0, "departureTick": 3 }
              ] },
            { "id": "1,1", "zoneId": "north",
              "customers": [ { "id": "c3", "persona": "Wanderer", "chargeRemaining": 1,
                               "maxCharge": 2, "departureTick": 4 } ] }
        ]
    }))
}

#[cfg(test)]
mod raw_tests {
    use super::*;
    use crate::SnapshotError;

    #[test]
    fn top_level_must_be_object() {
        let err = MapSnapshot::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, SnapshotError::NotAnObject(ref k) if k == "array"));
    }

    #[test]
    fn empty_object_is_empty_snapshot() {
        let map = MapSnapshot::from_value(json!({})).unwrap();
        assert!(map.nodes.is_empty());
        assert_eq!(map.horizon(), None);
    }

    #[test]
    fn wrong_types_read_as_absent() {
        let map = MapSnapshot::from_value(json!({
            "ticks": "abc",
            "nodes": [
                "not a node",
                { "id": 7, "target": "oops", "customers": { "bad": true } }
            ]
        }))
        .unwrap();
        assert_eq!(map.ticks, None);
        assert_eq!(map.nodes.len(), 1);
        assert_eq!(map.nodes[0].id.as_deref(), Some("7"));
        assert_eq!(map.nodes[0].target, None);
        assert!(map.nodes[0].customers.is_empty());
    }

    #[test]
    fn numeric_strings_accepted() {
        let map = MapSnapshot::from_json(
            r#"{"ticks": "12", "nodes": [{"customers": [{"id": "c", "maxCharge": "40"}]}]}"#,
        )
        .unwrap();
        assert_eq!(map.horizon(), Some(12));
        assert_eq!(map.nodes[0].customers[0].max_charge, Some(40.0));
    }

    #[test]
    fn lowercase_type_alias() {
        let map = MapSnapshot::from_value(json!({
            "nodes": [{ "id": "0,0", "target": { "type": "ChargingStation" } }]
        }))
        .unwrap();
        assert_eq!(map.nodes[0].target.as_ref().unwrap().kind.as_deref(), Some("ChargingStation"));
    }
}

#[cfg(test)]
mod model_tests {
    use ch_core::{Coord, CustomerId, NodeId, Tick, ZoneId};

    use super::*;
    use crate::{Persona, StationKind};

    #[test]
    fn only_charging_targets_become_stations() {
        let snap = sample();
        assert_eq!(snap.stations.len(), 2);
        assert_eq!(snap.stations[0].kind, StationKind::Standard);
        assert_eq!(snap.stations[1].kind, StationKind::Green);
        assert_eq!(snap.green_stations().count(), 1);
    }

    #[test]
    fn customers_carry_node_and_zone() {
        let snap = sample();
        assert_eq!(snap.customers.len(), 3);
        let c1 = snap.customer(&CustomerId::from("c1")).unwrap();
        assert_eq!(c1.node, NodeId::from("9,9"));
        assert_eq!(c1.zone, ZoneId::from("south"));
        assert_eq!(c1.location, Some(Coord::new(9.0, 9.0)));
        assert_eq!(c1.persona, Persona::Stressed);
        assert!((c1.soc() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn unknown_persona_is_preserved() {
        let snap = sample();
        let c3 = snap.customer(&CustomerId::from("c3")).unwrap();
        assert_eq!(c3.persona, Persona::Other("Wanderer".into()));
    }

    #[test]
    fn zones_group_nodes_and_stations() {
        let snap = sample();
        assert_eq!(snap.zones.len(), 2);
        let north = &snap.zones[0];
        assert_eq!(north.id, ZoneId::from("north"));
        assert_eq!(north.nodes.len(), 3);
        assert_eq!(north.stations.len(), 2);
        assert_eq!(snap.stations_in_zone(&ZoneId::from("south")).count(), 0);
    }

    #[test]
    fn repeated_customer_id_keeps_first_occurrence() {
        let snap = snapshot(json!({ "nodes": [
            { "id": "1,1", "zoneId": "a", "customers": [{ "id": "dup", "persona": "Stressed" }] },
            { "id": "2,2", "zoneId": "b", "customers": [{ "id": "dup", "persona": "Neutral" }] },
        ]}));
        assert_eq!(snap.customers.len(), 1);
        assert_eq!(snap.customers[0].node, NodeId::from("1,1"));
        assert_eq!(snap.customers[0].persona, Persona::Stressed);
    }

    #[test]
    fn horizon_comes_from_metadata() {
        assert_eq!(sample().horizon, Some(96));
        assert_eq!(sample().name.as_deref(), Some("Turbohill"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let snap = snapshot(json!({
            "nodes": [{ "id": "2,2", "customers": [ { "id": "bare" } ] }]
        }));
        let c = &snap.customers[0];
        assert_eq!(c.max_charge, 1.0);
        assert_eq!(c.charge_remaining, 0.0);
        assert_eq!(c.departure_tick, Tick(0));
        assert_eq!(c.persona, Persona::Neutral);
        assert!(!c.is_eligible(Tick(0)));
    }

    #[test]
    fn non_positive_capacity_yields_zero_soc() {
        let snap = snapshot(json!({
            "nodes": [{ "id": "2,2", "customers": [
                { "id": "a", "chargeRemaining": 50, "maxCharge": 0 },
                { "id": "b", "chargeRemaining": 50, "maxCharge": -3 }
            ] }]
        }));
        for c in &snap.customers {
            assert_eq!(c.max_charge, 1.0);
            assert_eq!(c.soc(), 0.0);
        }
    }

    #[test]
    fn customers_without_id_are_dropped() {
        let snap = snapshot(json!({
            "nodes": [{ "id": "2,2", "customers": [ { "persona": "Neutral" }, { "id": "" } ] }]
        }));
        assert!(snap.customers.is_empty());
    }

    #[test]
    fn malformed_node_id_has_no_location() {
        let snap = snapshot(json!({
            "nodes": [{ "id": "depot", "target": { "Type": "ChargingStation" } }]
        }));
        assert_eq!(snap.stations[0].location, None);
        assert_eq!(snap.location(&NodeId::from("depot")), None);
        assert_eq!(snap.location(&NodeId::from("4_5")), Some(Coord::new(4.0, 5.0)));
    }

    #[test]
    fn eligibility_is_strict() {
        let snap = sample();
        let c2 = snap.customer(&CustomerId::from("c2")).unwrap();
        assert!(c2.is_eligible(Tick(2)));
        assert!(!c2.is_eligible(Tick(3)));
    }
}

#[cfg(test)]
mod summary_tests {
    use ch_core::ZoneId;

    use super::*;

    #[test]
    fn counts_personas_and_zone_stations() {
        let summary = sample().summary();
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.customers, 3);
        assert_eq!(summary.stations, 2);
        assert_eq!(summary.personas.get("Stressed"), Some(&1));
        assert_eq!(summary.personas.get("Wanderer"), Some(&1));
        let north = &summary.zones[&ZoneId::from("north")];
        assert_eq!((north.standard, north.green), (1, 1));
        assert_eq!(summary.zones[&ZoneId::from("south")].standard, 0);
        assert!(summary.to_string().starts_with("4 nodes, 2 stations, 3 customers"));
    }
}

#[cfg(test)]
mod soc_properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn soc_always_in_unit_interval(
            charge in prop_oneof![Just(None), (-1.0e6f64..1.0e6).prop_map(Some)],
            max in prop_oneof![Just(None), (-1.0e6f64..1.0e6).prop_map(Some)],
        ) {
            let snap = snapshot(json!({
                "nodes": [{ "id": "0,0", "customers": [
                    { "id": "c", "chargeRemaining": charge, "maxCharge": max, "departureTick": 5 }
                ] }]
            }));
            let c = &snap.customers[0];
            prop_assert!(c.max_charge > 0.0);
            let soc = c.soc();
            prop_assert!((0.0..=1.0).contains(&soc), "soc {soc} out of range");
            if max.is_none_or(|m| m <= 0.0) {
                prop_assert_eq!(soc, 0.0);
            }
        }
    }
}
