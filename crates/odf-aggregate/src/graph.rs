//! Aggregated flow-graph types.

use rustc_hash::FxHashMap;

use odf_core::{CellRef, GeoPoint, PairKey};

// ── AggregatedFlow ────────────────────────────────────────────────────────────

/// One cross-cell flow: summed weight plus the endpoint cells retained
/// from the first record seen for its key.
///
/// In undirected mode `origin`/`destination` reflect that first record's
/// orientation, not the normalized key order.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregatedFlow {
    pub weight:      f64,
    pub origin:      CellRef,
    pub destination: CellRef,
}

// ── CellStats ─────────────────────────────────────────────────────────────────

/// Per-cell weight totals.
///
/// A self-trip adds its weight to **both** `outbound` and `inbound` of its
/// cell, so `total()` counts it twice.  This mirrors how the totals feed
/// the cell-volume display; consumers wanting pure through-traffic must
/// subtract the cell's self-flow weight from each side.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStats {
    /// Weight of trips originating in this cell (self-trips included).
    pub outbound: f64,
    /// Weight of trips ending in this cell (self-trips included).
    pub inbound:  f64,
}

impl CellStats {
    #[inline]
    pub fn total(&self) -> f64 {
        self.outbound + self.inbound
    }
}

// ── StopRole / StopPoint ──────────────────────────────────────────────────────

/// Bitmask of the roles a stop point has been observed in.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRole(u8);

impl StopRole {
    pub const ORIGIN:      StopRole = StopRole(0b01);
    pub const DESTINATION: StopRole = StopRole(0b10);
    pub const BOTH:        StopRole = StopRole(0b11);

    /// OR another observation into this role.
    #[inline]
    pub fn insert(&mut self, other: StopRole) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn is_origin(self) -> bool {
        self.0 & Self::ORIGIN.0 != 0
    }

    #[inline]
    pub fn is_destination(self) -> bool {
        self.0 & Self::DESTINATION.0 != 0
    }

    #[inline]
    pub fn is_both(self) -> bool {
        self == Self::BOTH
    }
}

/// A deduplicated trip endpoint, tagged with every role it was seen in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopPoint {
    pub position: GeoPoint,
    pub role:     StopRole,
}

// ── SkipCounts ────────────────────────────────────────────────────────────────

/// Records excluded from an aggregation pass, by reason.
///
/// Skips are a data-quality tolerance, not errors; the counts exist so the
/// tolerance is observable.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipCounts {
    /// Records with a non-finite origin or destination coordinate.
    pub bad_geometry: usize,
    /// Records with a non-positive or non-finite weight.
    pub bad_weight:   usize,
}

impl SkipCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.bad_geometry + self.bad_weight
    }
}

// ── FlowGraph ─────────────────────────────────────────────────────────────────

/// The result of one aggregation pass.
///
/// Every input record with valid geometry and positive finite weight that
/// survives the time-band filter contributes to exactly one of `flows` or
/// `self_flows`, and to exactly two `cell_stats` sides (one cell counted
/// twice for a self-trip).
#[derive(Clone, Debug, Default)]
pub struct FlowGraph {
    /// Cross-cell flows keyed by (direction-sensitive or normalized) pair.
    pub flows:      FxHashMap<PairKey, AggregatedFlow>,
    /// Same-cell trip weight per cell.
    pub self_flows: FxHashMap<CellRef, f64>,
    /// Inbound/outbound weight totals per cell.
    pub cell_stats: FxHashMap<CellRef, CellStats>,
    /// Deduplicated endpoints, sorted by rounded coordinate for stable
    /// output ordering.
    pub stops:      Vec<StopPoint>,
    /// Records excluded from this pass.
    pub skipped:    SkipCounts,
}

impl FlowGraph {
    /// Sum of all cross-cell flow weights.
    pub fn flow_weight_total(&self) -> f64 {
        self.flows.values().map(|f| f.weight).sum()
    }

    /// Sum of all same-cell flow weights.
    pub fn self_flow_weight_total(&self) -> f64 {
        self.self_flows.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty() && self.self_flows.is_empty()
    }
}
