//! Unit tests for envelope computation and cell conversion.

use odf_core::{CellRef, GeoPoint, TripRecord};

use crate::{CellGrid, GridEnvelope};

fn trip(o: (f64, f64), d: (f64, f64)) -> TripRecord {
    TripRecord::new(GeoPoint::new(o.0, o.1), GeoPoint::new(d.0, d.1), 1.0, None)
}

#[cfg(test)]
mod envelope {
    use super::*;

    #[test]
    fn covers_all_endpoints() {
        let trips = vec![
            trip((-88.10, 30.60), (-88.00, 30.70)),
            trip((-88.05, 30.75), (-88.20, 30.65)),
        ];
        let env = GridEnvelope::from_trips(&trips);
        assert_eq!(env.min_lon, -88.20);
        assert_eq!(env.max_lon, -88.00);
        assert_eq!(env.min_lat, 30.60);
        assert_eq!(env.max_lat, 30.75);
        let expected_mean = (30.60 + 30.70 + 30.75 + 30.65) / 4.0;
        assert!((env.mean_lat - expected_mean).abs() < 1e-12);
    }

    #[test]
    fn ignores_non_finite_endpoints() {
        let trips = vec![
            trip((-88.10, 30.60), (-88.00, 30.70)),
            trip((f64::NAN, 30.99), (-88.00, f64::INFINITY)),
        ];
        let env = GridEnvelope::from_trips(&trips);
        assert_eq!(env.max_lat, 30.70);
    }

    #[test]
    fn empty_dataset_is_zero_envelope() {
        let env = GridEnvelope::from_trips(&[]);
        assert_eq!(env, GridEnvelope::default());
        assert_eq!(env.width(), 0.0);
        assert_eq!(env.height(), 0.0);
    }
}

#[cfg(test)]
mod grid {
    use super::*;

    fn city_grid() -> CellGrid {
        let trips = vec![trip((-88.10, 30.60), (-88.00, 30.70))];
        CellGrid::new(GridEnvelope::from_trips(&trips), 100.0)
    }

    #[test]
    fn envelope_corner_is_cell_zero() {
        let grid = city_grid();
        let corner = GeoPoint::new(grid.envelope().min_lon, grid.envelope().min_lat);
        assert_eq!(grid.cell_of(corner), CellRef::new(0, 0));
    }

    #[test]
    fn centroid_maps_back_to_its_cell() {
        let grid = city_grid();
        for cell in [CellRef::new(0, 0), CellRef::new(3, 7), CellRef::new(41, 2)] {
            assert_eq!(grid.cell_of(grid.centroid_of(cell)), cell);
        }
    }

    #[test]
    fn cells_are_roughly_square_in_meters() {
        let grid = city_grid();
        let (d_lon, d_lat) = grid.cell_size_deg();
        let origin = GeoPoint::new(-88.05, 30.65);
        let east  = GeoPoint::new(origin.lon + d_lon, origin.lat);
        let north = GeoPoint::new(origin.lon, origin.lat + d_lat);
        let ew = origin.distance_m(east);
        let ns = origin.distance_m(north);
        assert!((ew - 100.0).abs() < 1.0, "east-west edge {ew}");
        assert!((ns - 100.0).abs() < 1.0, "north-south edge {ns}");
    }

    #[test]
    fn polygon_is_closed_and_contains_centroid() {
        let grid = city_grid();
        let cell = CellRef::new(5, 5);
        let ring = grid.polygon_of(cell);
        assert_eq!(ring[0].lon, ring[4].lon);
        assert_eq!(ring[0].lat, ring[4].lat);
        let centroid = grid.centroid_of(cell);
        assert!(ring[0].lon < centroid.lon && centroid.lon < ring[1].lon);
        assert!(ring[0].lat < centroid.lat && centroid.lat < ring[2].lat);
    }

    #[test]
    fn adjacent_points_land_in_adjacent_cells() {
        let grid = city_grid();
        let (d_lon, d_lat) = grid.cell_size_deg();
        let p = grid.centroid_of(CellRef::new(2, 2));
        assert_eq!(
            grid.cell_of(GeoPoint::new(p.lon + d_lon, p.lat)),
            CellRef::new(2, 3)
        );
        assert_eq!(
            grid.cell_of(GeoPoint::new(p.lon, p.lat + d_lat)),
            CellRef::new(3, 2)
        );
    }

    #[test]
    fn degenerate_single_point_dataset() {
        let trips = vec![trip((-88.04, 30.69), (-88.04, 30.69))];
        let grid = CellGrid::new(GridEnvelope::from_trips(&trips), 100.0);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.cell_of(GeoPoint::new(-88.04, 30.69)), CellRef::new(0, 0));
    }

    #[test]
    fn dense_enumeration_covers_grid() {
        let grid = city_grid();
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), (grid.rows() * grid.cols()) as usize);
        assert_eq!(cells[0], CellRef::new(0, 0));
        let last = cells[cells.len() - 1];
        assert_eq!(last.row as u32, grid.rows() - 1);
        assert_eq!(last.col as u32, grid.cols() - 1);
    }

    #[test]
    fn grid_identical_regardless_of_filtered_subset() {
        // The envelope must come from the unfiltered dataset; two grids
        // built from the same dataset are bit-identical even if a caller
        // later aggregates different temporal subsets.
        let trips = vec![
            trip((-88.10, 30.60), (-88.00, 30.70)),
            trip((-88.05, 30.75), (-88.20, 30.65)),
        ];
        let a = CellGrid::new(GridEnvelope::from_trips(&trips), 100.0);
        let b = CellGrid::new(GridEnvelope::from_trips(&trips), 100.0);
        assert_eq!(a.envelope(), b.envelope());
        assert_eq!(a.cell_size_deg(), b.cell_size_deg());
    }
}
