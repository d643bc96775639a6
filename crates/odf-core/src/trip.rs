//! The `TripRecord` — one weighted origin→destination observation.

use crate::{GeoPoint, TimeBand};

/// One weighted movement observation: origin point, destination point,
/// weight, and an optional time interval.
///
/// Records are plain data; validation happens at ingestion (shape) and at
/// aggregation (weight / coordinate finiteness) — never via panics.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
    /// Trip weight (e.g. passenger count).  Non-positive or non-finite
    /// weights exclude the record from aggregation.
    pub weight:      f64,
    /// The trip's own time interval, if the source data carried one that
    /// parsed.  `None` means the record has no usable interval.
    pub band:        Option<TimeBand>,
}

impl TripRecord {
    pub fn new(origin: GeoPoint, destination: GeoPoint, weight: f64, band: Option<TimeBand>) -> Self {
        Self { origin, destination, weight, band }
    }

    /// `true` if both endpoints are finite coordinates.
    #[inline]
    pub fn has_valid_geometry(&self) -> bool {
        self.origin.is_finite() && self.destination.is_finite()
    }

    /// `true` if the weight contributes to aggregation.
    #[inline]
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }

    /// Time-band filter predicate.
    ///
    /// With no active band every record passes.  With an active band the
    /// record passes only if its own interval overlaps — records without a
    /// usable interval are excluded (fail-closed).
    #[inline]
    pub fn passes_band(&self, active: Option<&TimeBand>) -> bool {
        match active {
            None       => true,
            Some(band) => self.band.as_ref().is_some_and(|own| band.overlaps(own)),
        }
    }
}
