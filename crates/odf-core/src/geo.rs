//! Geographic coordinate type and distance approximation.
//!
//! `GeoPoint` uses `f64` longitude/latitude.  Grid cell assignment floors
//! `(coordinate − envelope_min) / cell_size`, and the envelope-stability
//! guarantee (identical grids across time-band changes) relies on the
//! arithmetic being carried out at full double precision.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Metres per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEG: f64 = 111_320.0;

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` if both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Equirectangular small-angle distance in metres.
    ///
    /// Longitude is compressed by the cosine of the mean latitude of the
    /// two points.  Accurate to well under 1 % at city scale, which is the
    /// scale cells and flow arcs live at; no geodesic math anywhere.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let mean_lat = ((self.lat + other.lat) * 0.5).to_radians();
        let dx = (other.lon - self.lon) * METERS_PER_DEG * mean_lat.cos();
        let dy = (other.lat - self.lat) * METERS_PER_DEG;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
