//! Dataset bounding envelope.
//!
//! The envelope is computed once per raw dataset from **all** trip
//! endpoints — never from a time-filtered subset.  Cell sizes derive from
//! it, so the resulting grid is bit-identical across time-band changes and
//! a focused cell or isolated pair stays addressable after the active
//! filter changes.

use odf_core::TripRecord;

/// Min/max extent and mean latitude of every trip endpoint in a dataset.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridEnvelope {
    pub min_lon:  f64,
    pub min_lat:  f64,
    pub max_lon:  f64,
    pub max_lat:  f64,
    /// Mean latitude of all endpoints — controls longitude cell compression.
    pub mean_lat: f64,
}

impl GridEnvelope {
    /// Scan the full unfiltered dataset.
    ///
    /// Endpoints with non-finite coordinates are ignored.  An empty (or
    /// all-malformed) dataset yields the zero envelope, which still forms
    /// a valid single-cell grid.
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut lat_sum = 0.0;
        let mut count   = 0u64;

        for trip in trips {
            for point in [trip.origin, trip.destination] {
                if !point.is_finite() {
                    continue;
                }
                min_lon = min_lon.min(point.lon);
                max_lon = max_lon.max(point.lon);
                min_lat = min_lat.min(point.lat);
                max_lat = max_lat.max(point.lat);
                lat_sum += point.lat;
                count += 1;
            }
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
            mean_lat: lat_sum / count as f64,
        }
    }

    /// Longitudinal extent in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitudinal extent in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
