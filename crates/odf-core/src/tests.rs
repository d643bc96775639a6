//! Unit tests for odf-core primitives.

#[cfg(test)]
mod cell {
    use crate::{CellRef, PairKey};

    #[test]
    fn ordering() {
        assert!(CellRef::new(0, 0) < CellRef::new(0, 1));
        assert!(CellRef::new(1, 0) > CellRef::new(0, 99));
    }

    #[test]
    fn directed_keys_keep_order() {
        let a = CellRef::new(0, 0);
        let b = CellRef::new(1, 1);
        assert_ne!(PairKey::directed(a, b), PairKey::directed(b, a));
    }

    #[test]
    fn undirected_keys_normalize() {
        let a = CellRef::new(0, 0);
        let b = CellRef::new(1, 1);
        assert_eq!(PairKey::undirected(a, b), PairKey::undirected(b, a));
        assert_eq!(PairKey::undirected(b, a).a, a);
    }

    #[test]
    fn touches_either_endpoint() {
        let key = PairKey::directed(CellRef::new(0, 0), CellRef::new(2, 3));
        assert!(key.touches(CellRef::new(0, 0)));
        assert!(key.touches(CellRef::new(2, 3)));
        assert!(!key.touches(CellRef::new(1, 1)));
    }

    #[test]
    fn display_is_stable() {
        let key = PairKey::directed(CellRef::new(3, -2), CellRef::new(7, 4));
        assert_eq!(key.to_string(), "3,-2>7,4");
    }
}

#[cfg(test)]
mod time {
    use crate::TimeBand;

    #[test]
    fn overlap_basic() {
        let morning = TimeBand::new(7.0, 9.0);
        assert!(morning.overlaps(&TimeBand::new(6.0, 8.0)));
        assert!(morning.overlaps(&TimeBand::new(8.0, 12.0)));
        assert!(morning.overlaps(&TimeBand::new(0.0, 24.0)));
    }

    #[test]
    fn touching_boundary_is_not_overlap() {
        let morning = TimeBand::new(7.0, 9.0);
        assert!(!morning.overlaps(&TimeBand::new(9.0, 10.0)));
        assert!(!morning.overlaps(&TimeBand::new(5.0, 7.0)));
    }

    #[test]
    fn parse_hh_hh() {
        let band: TimeBand = "7-9".parse().unwrap();
        assert_eq!(band, TimeBand::new(7.0, 9.0));
        let band: TimeBand = " 17-19 ".parse().unwrap();
        assert_eq!(band, TimeBand::new(17.0, 19.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("seven-nine".parse::<TimeBand>().is_err());
        assert!("7".parse::<TimeBand>().is_err());
        assert!("".parse::<TimeBand>().is_err());
    }
}

#[cfg(test)]
mod trip {
    use crate::{GeoPoint, TimeBand, TripRecord};

    fn trip(weight: f64, band: Option<TimeBand>) -> TripRecord {
        TripRecord::new(
            GeoPoint::new(-88.04, 30.69),
            GeoPoint::new(-88.03, 30.70),
            weight,
            band,
        )
    }

    #[test]
    fn weight_validity() {
        assert!(trip(1.0, None).has_valid_weight());
        assert!(!trip(0.0, None).has_valid_weight());
        assert!(!trip(-3.0, None).has_valid_weight());
        assert!(!trip(f64::NAN, None).has_valid_weight());
        assert!(!trip(f64::INFINITY, None).has_valid_weight());
    }

    #[test]
    fn geometry_validity() {
        let bad = TripRecord::new(
            GeoPoint::new(f64::NAN, 30.69),
            GeoPoint::new(-88.03, 30.70),
            1.0,
            None,
        );
        assert!(!bad.has_valid_geometry());
        assert!(trip(1.0, None).has_valid_geometry());
    }

    #[test]
    fn no_active_band_includes_everything() {
        assert!(trip(1.0, None).passes_band(None));
        assert!(trip(1.0, Some(TimeBand::new(3.0, 4.0))).passes_band(None));
    }

    #[test]
    fn active_band_is_fail_closed() {
        let band = TimeBand::new(7.0, 9.0);
        // No interval on the trip → excluded while a filter is active.
        assert!(!trip(1.0, None).passes_band(Some(&band)));
        // Overlapping interval → included.
        assert!(trip(1.0, Some(TimeBand::new(6.0, 8.0))).passes_band(Some(&band)));
        // Boundary-touching interval → excluded.
        assert!(!trip(1.0, Some(TimeBand::new(9.0, 10.0))).passes_band(Some(&band)));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(-88.043, 30.694);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km everywhere.
        let a = GeoPoint::new(-88.0, 30.0);
        let b = GeoPoint::new(-88.0, 31.0);
        let d = a.distance_m(b);
        assert!((d - 111_320.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_compresses_with_latitude() {
        let eq = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(1.0, 0.0));
        let north = GeoPoint::new(0.0, 60.0).distance_m(GeoPoint::new(1.0, 60.0));
        assert!(north < eq * 0.51, "cos(60°) should halve the span, got {north} vs {eq}");
    }
}

#[cfg(test)]
mod config {
    use crate::{FlowConfig, FocusDirection};

    #[test]
    fn defaults() {
        let cfg = FlowConfig::default();
        assert_eq!(cfg.base_cell_size_meters, 100.0);
        assert_eq!(cfg.min_weight_threshold, 1.0);
        assert!(!cfg.undirected);
        assert!(!cfg.show_all_cells);
        assert_eq!(cfg.focus_direction, FocusDirection::All);
    }

    #[test]
    fn validate_rejects_bad_cell_size() {
        let mut cfg = FlowConfig::default();
        cfg.base_cell_size_meters = 0.0;
        assert!(cfg.validate().is_err());
        cfg.base_cell_size_meters = f64::NAN;
        assert!(cfg.validate().is_err());
        cfg.base_cell_size_meters = 250.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn focus_direction_round_trip() {
        for dir in [FocusDirection::All, FocusDirection::Outbound, FocusDirection::Inbound] {
            assert_eq!(dir.to_string().parse::<FocusDirection>().unwrap(), dir);
        }
        assert!("sideways".parse::<FocusDirection>().is_err());
    }
}
