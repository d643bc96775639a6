//! CSV trip loader.
//!
//! # CSV format
//!
//! One row per trip.  The `interval` column is optional; when present it
//! holds an `"HH-HH"` band.
//!
//! ```csv
//! origin_lon,origin_lat,dest_lon,dest_lat,weight,interval
//! -88.100,30.600,-88.000,30.700,12,7-9
//! -88.000,30.700,-88.100,30.600,4,17-19
//! -88.050,30.650,-88.040,30.660,3,
//! ```
//!
//! Rows that fail to deserialize are skipped and counted on the returned
//! [`TripDataset`] — bad rows are a data-quality tolerance, not a load
//! failure.  An unreadable stream (I/O mid-file) is a hard error.
//! An interval that is present but unparsable leaves the record with
//! `band: None`; the time-band filter then excludes it while a band is
//! active (fail-closed) without dropping it from untimed views.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use odf_core::{GeoPoint, TimeBand, TripRecord};

use crate::{StoreError, StoreResult};

// ── TripDataset ───────────────────────────────────────────────────────────────

/// A loaded, immutable trip dataset plus its ingestion skip count.
#[derive(Clone, Debug, Default)]
pub struct TripDataset {
    pub trips:        Vec<TripRecord>,
    /// Rows/features the loader rejected (logged at `warn`).
    pub skipped_rows: usize,
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRow {
    origin_lon: f64,
    origin_lat: f64,
    dest_lon:   f64,
    dest_lat:   f64,
    weight:     f64,
    #[serde(default)]
    interval:   Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load trips from a CSV file.
pub fn load_trips_csv(path: &Path) -> StoreResult<TripDataset> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_trips_reader<R: Read>(reader: R) -> StoreResult<TripDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut dataset = TripDataset::default();

    for result in csv_reader.deserialize::<TripRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => {
                return Err(StoreError::Parse(e.to_string()));
            }
            Err(e) => {
                log::warn!("skipping malformed trip row: {e}");
                dataset.skipped_rows += 1;
                continue;
            }
        };
        dataset.trips.push(TripRecord::new(
            GeoPoint::new(row.origin_lon, row.origin_lat),
            GeoPoint::new(row.dest_lon, row.dest_lat),
            row.weight,
            parse_interval(row.interval.as_deref()),
        ));
    }

    if dataset.skipped_rows > 0 {
        log::warn!("CSV load skipped {} rows", dataset.skipped_rows);
    }
    Ok(dataset)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse an optional `"HH-HH"` interval; unparsable values degrade to
/// `None` rather than rejecting the row.
pub(crate) fn parse_interval(raw: Option<&str>) -> Option<TimeBand> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<TimeBand>() {
        Ok(band) => Some(band),
        Err(e) => {
            log::debug!("unparsable trip interval {raw:?}: {e}");
            None
        }
    }
}
