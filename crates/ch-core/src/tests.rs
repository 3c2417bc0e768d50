//! Unit tests for ch-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, NodeId, ZoneId};

    #[test]
    fn display_is_raw_string() {
        assert_eq!(NodeId::from("4,2").to_string(), "4,2");
        assert_eq!(CustomerId::new("c-17").as_str(), "c-17");
    }

    #[test]
    fn default_is_empty() {
        assert!(ZoneId::default().is_empty());
        assert!(!ZoneId::from("z1").is_empty());
    }

    #[test]
    fn ordering_follows_string() {
        assert!(NodeId::from("a") < NodeId::from("b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&CustomerId::from("c1")).unwrap();
        assert_eq!(json, "\"c1\"");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Coord, UNRESOLVED_DISTANCE};

    #[test]
    fn parses_common_separators() {
        assert_eq!(Coord::parse("3,4"), Some(Coord::new(3.0, 4.0)));
        assert_eq!(Coord::parse("3_4"), Some(Coord::new(3.0, 4.0)));
        assert_eq!(Coord::parse(" 1.5 : -2 "), Some(Coord::new(1.5, -2.0)));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(Coord::parse(""), None);
        assert_eq!(Coord::parse("station-a"), None);
        assert_eq!(Coord::parse("7"), None);
        assert_eq!(Coord::parse("1,2,3"), None);
        assert_eq!(Coord::parse("x,2"), None);
        assert_eq!(Coord::parse("inf,2"), None);
    }

    #[test]
    fn euclidean_distance() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(3.0, 4.0);
        assert!((a.distance(b, 1.0) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a, 1.0), 0.0);
    }

    #[test]
    fn axis_weight_scales_y_only() {
        let a = Coord::new(0.0, 0.0);
        assert!((a.distance(Coord::new(0.0, 2.0), 2.0) - 4.0).abs() < 1e-12);
        assert!((a.distance(Coord::new(2.0, 0.0), 2.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unresolved_location_uses_sentinel() {
        let a = Some(Coord::new(0.0, 0.0));
        assert_eq!(Coord::distance_or_sentinel(a, None, 1.0), UNRESOLVED_DISTANCE);
        assert_eq!(Coord::distance_or_sentinel(None, None, 1.0), UNRESOLVED_DISTANCE);
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn until_saturates() {
        assert_eq!(Tick(3).until(Tick(10)), 7);
        assert_eq!(Tick(10).until(Tick(3)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn run_config_defaults() {
        let cfg = RunConfig::new("Turbohill");
        assert_eq!(cfg.end_tick(), Tick(288));
        assert_eq!(cfg.max_retries_per_tick, 3);
    }

    #[test]
    fn horizon_resolution_order() {
        assert_eq!(RunConfig::resolve_total_ticks(Some(20), Some(96)), 20);
        assert_eq!(RunConfig::resolve_total_ticks(None, Some(96)), 96);
        assert_eq!(RunConfig::resolve_total_ticks(None, None), 288);
    }

    #[test]
    fn blank_map_name_is_invalid() {
        assert!(RunConfig::new("Turbohill").validate().is_ok());
        assert!(matches!(RunConfig::new(" ").validate(), Err(crate::CoreError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::{FixedRandom, RandomSource, SimRng, Tick};

    #[test]
    fn same_seed_same_tick_is_deterministic() {
        let mut r1 = SimRng::for_tick(12345, Tick(3));
        let mut r2 = SimRng::for_tick(12345, Tick(3));
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_ticks_differ() {
        let mut r0 = SimRng::for_tick(1, Tick(0));
        let mut r1 = SimRng::for_tick(1, Tick(1));
        assert_ne!(r0.unit(), r1.unit(), "seeds for adjacent ticks should diverge");
    }

    #[test]
    fn unit_and_index_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        assert!(rng.chance(7.0), "probabilities are clamped");
    }

    #[test]
    fn fixed_random_is_constant() {
        let mut stub = FixedRandom { unit: 0.25, chance: false, index: 9 };
        assert_eq!(stub.unit(), 0.25);
        assert!(!stub.chance(1.0));
        assert_eq!(stub.index(3), 2, "index is clamped to the slice");
        assert!(FixedRandom::always().chance(0.0));
    }
}
