//! The cell grid — coordinate ↔ cell conversion.
//!
//! # Cell sizing
//!
//! Cell sizes are angular degrees derived once per envelope from a target
//! edge length in metres:
//!
//! ```text
//! d_lat = base_m / 111_320
//! d_lon = base_m / (111_320 * cos(mean_lat))
//! ```
//!
//! The cosine correction keeps cells approximately square despite
//! longitude compression at higher latitudes.  `cell_of` is a pure, total
//! function — two floors and two subtractions, no search structure.

use odf_core::{CellRef, GeoPoint, METERS_PER_DEG};

use crate::GridEnvelope;

/// A latitude-corrected rectangular grid anchored at its envelope's
/// south-west corner.
///
/// Build once per raw dataset with [`CellGrid::new`]; reuse across every
/// time-band, threshold, and focus change.  Only a new source dataset
/// warrants a new grid.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellGrid {
    envelope: GridEnvelope,
    d_lon:    f64,
    d_lat:    f64,
}

impl CellGrid {
    /// Derive cell sizes from the envelope and a target edge length.
    ///
    /// `base_cell_size_meters` must be positive and finite (validated by
    /// `FlowConfig::validate` upstream; debug-asserted here).
    pub fn new(envelope: GridEnvelope, base_cell_size_meters: f64) -> Self {
        debug_assert!(
            base_cell_size_meters.is_finite() && base_cell_size_meters > 0.0,
            "cell size must be positive and finite"
        );
        let d_lat = base_cell_size_meters / METERS_PER_DEG;
        let d_lon = base_cell_size_meters / (METERS_PER_DEG * envelope.mean_lat.to_radians().cos());
        Self { envelope, d_lon, d_lat }
    }

    #[inline]
    pub fn envelope(&self) -> &GridEnvelope {
        &self.envelope
    }

    /// Angular cell size as `(d_lon, d_lat)` degrees.
    #[inline]
    pub fn cell_size_deg(&self) -> (f64, f64) {
        (self.d_lon, self.d_lat)
    }

    // ── Coordinate ↔ cell conversion ──────────────────────────────────────

    /// Map a coordinate to its cell.  Pure and total; points outside the
    /// envelope map to out-of-range (possibly negative) indices rather
    /// than clamping.
    #[inline]
    pub fn cell_of(&self, point: GeoPoint) -> CellRef {
        CellRef {
            row: ((point.lat - self.envelope.min_lat) / self.d_lat).floor() as i32,
            col: ((point.lon - self.envelope.min_lon) / self.d_lon).floor() as i32,
        }
    }

    /// Representative centroid of a cell.
    #[inline]
    pub fn centroid_of(&self, cell: CellRef) -> GeoPoint {
        GeoPoint {
            lon: self.envelope.min_lon + (cell.col as f64 + 0.5) * self.d_lon,
            lat: self.envelope.min_lat + (cell.row as f64 + 0.5) * self.d_lat,
        }
    }

    /// Cell boundary as a closed 5-point ring (first point repeated last),
    /// counter-clockwise from the south-west corner.
    pub fn polygon_of(&self, cell: CellRef) -> [GeoPoint; 5] {
        let west  = self.envelope.min_lon + cell.col as f64 * self.d_lon;
        let south = self.envelope.min_lat + cell.row as f64 * self.d_lat;
        let east  = west + self.d_lon;
        let north = south + self.d_lat;
        [
            GeoPoint::new(west, south),
            GeoPoint::new(east, south),
            GeoPoint::new(east, north),
            GeoPoint::new(west, north),
            GeoPoint::new(west, south),
        ]
    }

    // ── Dense enumeration ─────────────────────────────────────────────────

    /// Number of rows needed to cover the envelope (at least 1, so a
    /// degenerate zero-extent dataset still has one addressable cell).
    pub fn rows(&self) -> u32 {
        (self.envelope.height() / self.d_lat).floor() as u32 + 1
    }

    /// Number of columns needed to cover the envelope (at least 1).
    pub fn cols(&self) -> u32 {
        (self.envelope.width() / self.d_lon).floor() as u32 + 1
    }

    /// All cells of the dense envelope grid, row-major.  Used to
    /// materialize the full selection grid when `show_all_cells` is set.
    pub fn iter_cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| {
            (0..cols).map(move |col| CellRef::new(row as i32, col as i32))
        })
    }
}
