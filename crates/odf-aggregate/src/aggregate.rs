//! The aggregation pass — trips in, flow graph out.
//!
//! # Algorithm
//!
//! One linear scan over the trip array:
//!
//! 1. Drop records failing the time-band filter, then records with
//!    malformed geometry or invalid weight (counted, never an error).
//! 2. Resolve both endpoints to cells; accumulate outbound weight at the
//!    origin cell and inbound weight at the destination cell.  This
//!    happens unconditionally, including for self-trips.
//! 3. Same cell on both ends → accumulate into `self_flows`; otherwise
//!    accumulate into `flows` under the pair key, retaining the first-seen
//!    endpoint cells for that key.
//! 4. OR each endpoint's role into the stop-point map, deduplicated by
//!    coordinate rounded to 6 decimal places (~0.1 m).
//!
//! Memory is linear in the number of distinct cells/pairs, time in the
//! filtered record count.

use rustc_hash::FxHashMap;

use odf_core::{PairKey, TimeBand, TripRecord};
use odf_grid::CellGrid;

use crate::graph::{AggregatedFlow, FlowGraph, StopPoint, StopRole};

/// Coordinate rounding factor for stop deduplication: 6 decimal places.
const STOP_ROUND: f64 = 1e6;

/// Aggregate `trips` into a flow graph over `grid`.
///
/// `band` selects the temporal subset (see `TripRecord::passes_band`);
/// `undirected` selects order-normalized pair keys.  The grid must have
/// been built from this dataset's full envelope — the caller never
/// rebuilds it between band changes.
pub fn aggregate(
    trips:      &[TripRecord],
    band:       Option<&TimeBand>,
    grid:       &CellGrid,
    undirected: bool,
) -> FlowGraph {
    let mut graph = FlowGraph::default();
    let mut stop_map: FxHashMap<(i64, i64), StopPoint> = FxHashMap::default();

    for trip in trips {
        if !trip.passes_band(band) {
            continue;
        }
        if !trip.has_valid_geometry() {
            graph.skipped.bad_geometry += 1;
            continue;
        }
        if !trip.has_valid_weight() {
            graph.skipped.bad_weight += 1;
            continue;
        }

        let origin_cell = grid.cell_of(trip.origin);
        let dest_cell   = grid.cell_of(trip.destination);

        // ── Cell stats: both sides, self-trips included ────────────────────
        graph.cell_stats.entry(origin_cell).or_default().outbound += trip.weight;
        graph.cell_stats.entry(dest_cell).or_default().inbound += trip.weight;

        // ── Flow vs self-flow ─────────────────────────────────────────────
        if origin_cell == dest_cell {
            *graph.self_flows.entry(origin_cell).or_insert(0.0) += trip.weight;
        } else {
            let key = PairKey::new(origin_cell, dest_cell, undirected);
            graph
                .flows
                .entry(key)
                .and_modify(|flow| flow.weight += trip.weight)
                .or_insert(AggregatedFlow {
                    weight:      trip.weight,
                    origin:      origin_cell,
                    destination: dest_cell,
                });
        }

        // ── Stop points ───────────────────────────────────────────────────
        record_stop(&mut stop_map, trip, StopRole::ORIGIN);
        record_stop(&mut stop_map, trip, StopRole::DESTINATION);
    }

    if graph.skipped.total() > 0 {
        log::warn!(
            "aggregation skipped {} records ({} bad geometry, {} bad weight)",
            graph.skipped.total(),
            graph.skipped.bad_geometry,
            graph.skipped.bad_weight,
        );
    }

    // Hash-map iteration order is arbitrary; sort stops by rounded key so
    // downstream geometry is identical across passes.
    let mut stops: Vec<((i64, i64), StopPoint)> = stop_map.into_iter().collect();
    stops.sort_unstable_by_key(|(key, _)| *key);
    graph.stops = stops.into_iter().map(|(_, stop)| stop).collect();

    graph
}

/// OR one endpoint's role into the dedup map, keeping the first-seen
/// exact position as the representative coordinate.
fn record_stop(
    stop_map: &mut FxHashMap<(i64, i64), StopPoint>,
    trip:     &TripRecord,
    role:     StopRole,
) {
    let position = if role == StopRole::ORIGIN {
        trip.origin
    } else {
        trip.destination
    };
    let key = (
        (position.lon * STOP_ROUND).round() as i64,
        (position.lat * STOP_ROUND).round() as i64,
    );
    stop_map
        .entry(key)
        .or_insert(StopPoint { position, role: StopRole::default() })
        .role
        .insert(role);
}
