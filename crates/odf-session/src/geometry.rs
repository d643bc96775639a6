//! Renderable geometry derived from an aggregated flow graph.
//!
//! Geometry is rebuilt only when the graph is: on a time-band, direction
//! mode, or dataset change.  Threshold, hover, focus, and isolation
//! changes reuse it untouched and only swap filters.

use odf_core::{CellRef, FlowConfig, GeoPoint, PairKey};
use odf_grid::CellGrid;

use odf_aggregate::{curve_between, CellStats, FlowGraph, StopPoint};

// ── Geometry records ──────────────────────────────────────────────────────────

/// One curved flow arc between two cell centroids.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowPath {
    pub key:    PairKey,
    pub weight: f64,
    /// `curve_steps + 1` points from origin centroid to destination centroid.
    pub path:   Vec<GeoPoint>,
}

/// One self-flow bubble at its cell's centroid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfFlowPoint {
    pub cell:     CellRef,
    pub position: GeoPoint,
    pub weight:   f64,
}

/// One selectable cell polygon with its traffic totals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPolygon {
    pub cell:  CellRef,
    /// Closed 5-point ring.
    pub ring:  [GeoPoint; 5],
    pub stats: CellStats,
}

/// The full geometry set handed to the render adapter.
#[derive(Clone, Debug, Default)]
pub struct FlowGeometry {
    pub paths:       Vec<FlowPath>,
    pub self_points: Vec<SelfFlowPoint>,
    pub stops:       Vec<StopPoint>,
    pub cells:       Vec<CellPolygon>,
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Materialize geometry for `graph`.
///
/// Arcs run between endpoint-cell centroids, seeded by the pair key's
/// stable textual form so re-synthesis after a filter change reproduces
/// them exactly.  With `show_all_cells` the dense envelope grid is
/// emitted (zero-traffic cells carry default stats); otherwise only cells
/// with traffic.  All output is sorted by key for pass-to-pass stability.
pub fn build_geometry(graph: &FlowGraph, grid: &CellGrid, config: &FlowConfig) -> FlowGeometry {
    // ── Flow arcs ─────────────────────────────────────────────────────────
    let mut paths: Vec<FlowPath> = graph
        .flows
        .iter()
        .map(|(&key, flow)| FlowPath {
            key,
            weight: flow.weight,
            path: curve_between(
                grid.centroid_of(flow.origin),
                grid.centroid_of(flow.destination),
                &key.to_string(),
                config.curve_steps,
            ),
        })
        .collect();
    paths.sort_unstable_by_key(|p| p.key);

    // ── Self-flow bubbles ─────────────────────────────────────────────────
    let mut self_points: Vec<SelfFlowPoint> = graph
        .self_flows
        .iter()
        .map(|(&cell, &weight)| SelfFlowPoint {
            cell,
            position: grid.centroid_of(cell),
            weight,
        })
        .collect();
    self_points.sort_unstable_by_key(|p| p.cell);

    // ── Cell polygons ─────────────────────────────────────────────────────
    let cells: Vec<CellPolygon> = if config.show_all_cells {
        grid.iter_cells()
            .map(|cell| CellPolygon {
                cell,
                ring:  grid.polygon_of(cell),
                stats: graph.cell_stats.get(&cell).copied().unwrap_or_default(),
            })
            .collect()
    } else {
        let mut with_traffic: Vec<CellPolygon> = graph
            .cell_stats
            .iter()
            .map(|(&cell, &stats)| CellPolygon {
                cell,
                ring: grid.polygon_of(cell),
                stats,
            })
            .collect();
        with_traffic.sort_unstable_by_key(|c| c.cell);
        with_traffic
    };

    FlowGeometry {
        paths,
        self_points,
        stops: graph.stops.clone(),
        cells,
    }
}
