//! GeoJSON trip loader — the upload format map front ends typically emit.
//!
//! Expects a `FeatureCollection` of `LineString` features; the first and
//! last coordinates of each line are the trip's origin and destination.
//! `weight` (alias `count`) and `interval` come from feature properties.
//!
//! ```json
//! { "type": "FeatureCollection", "features": [
//!   { "type": "Feature",
//!     "geometry": { "type": "LineString",
//!                   "coordinates": [[-88.1, 30.6], [-88.0, 30.7]] },
//!     "properties": { "weight": 12, "interval": "7-9" } }
//! ] }
//! ```
//!
//! A payload that is not valid JSON (or not a feature collection) is a
//! hard parse failure.  Individual features with missing geometry, fewer
//! than two coordinates, or no weight are skipped and counted.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use odf_core::{GeoPoint, TimeBand, TripRecord};

use crate::loader::{parse_interval, TripDataset};
use crate::{StoreError, StoreResult};

// ── GeoJSON shapes ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry:   Option<Geometry>,
    #[serde(default)]
    properties: Properties,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind:        String,
    /// Left as raw JSON: coordinate nesting depends on the geometry type,
    /// and a stray Point feature must cost one skip, not the whole load.
    #[serde(default)]
    coordinates: serde_json::Value,
}

#[derive(Deserialize, Default)]
struct Properties {
    #[serde(alias = "count")]
    weight:     Option<f64>,
    /// `"HH-HH"` string form of the trip interval.
    interval:   Option<String>,
    /// Numeric pair form; takes precedence over `interval` when both
    /// hours are present.
    #[serde(rename = "startHour")]
    start_hour: Option<f64>,
    #[serde(rename = "endHour")]
    end_hour:   Option<f64>,
}

impl Properties {
    fn band(&self) -> Option<TimeBand> {
        match (self.start_hour, self.end_hour) {
            (Some(start), Some(end)) => Some(TimeBand::new(start, end)),
            _ => parse_interval(self.interval.as_deref()),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load trips from a GeoJSON file.
pub fn load_trips_geojson(path: &Path) -> StoreResult<TripDataset> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_trips_geojson_reader(file)
}

/// Like [`load_trips_geojson`] but accepts any `Read` source.
pub fn load_trips_geojson_reader<R: Read>(reader: R) -> StoreResult<TripDataset> {
    let collection: FeatureCollection =
        serde_json::from_reader(reader).map_err(|e| StoreError::Parse(e.to_string()))?;

    let mut dataset = TripDataset::default();

    for feature in collection.features {
        let Some(geometry) = feature.geometry else {
            dataset.skipped_rows += 1;
            continue;
        };
        let line: Vec<[f64; 2]> = if geometry.kind == "LineString" {
            serde_json::from_value(geometry.coordinates).unwrap_or_default()
        } else {
            Vec::new()
        };
        if line.len() < 2 {
            dataset.skipped_rows += 1;
            continue;
        }
        let Some(weight) = feature.properties.weight else {
            dataset.skipped_rows += 1;
            continue;
        };

        let [origin_lon, origin_lat] = line[0];
        let [dest_lon, dest_lat] = line[line.len() - 1];
        dataset.trips.push(TripRecord::new(
            GeoPoint::new(origin_lon, origin_lat),
            GeoPoint::new(dest_lon, dest_lat),
            weight,
            feature.properties.band(),
        ));
    }

    if dataset.skipped_rows > 0 {
        log::warn!("GeoJSON load skipped {} features", dataset.skipped_rows);
    }
    Ok(dataset)
}
