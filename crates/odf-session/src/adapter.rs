//! The render-adapter boundary.
//!
//! The engine never draws.  It hands the external rendering surface a
//! geometry set once per aggregation and a filter set after every state
//! transition; the surface applies filters to already-uploaded geometry
//! without re-uploading it.  Pointer events flow the other way as
//! [`PointerEvent`]s carrying the feature identity the surface attached
//! to each layer.

use odf_core::{CellRef, PairKey};

use crate::filter::LayerFilters;
use crate::geometry::FlowGeometry;

// ── PointerEvent ──────────────────────────────────────────────────────────────

/// A pointer gesture reported by the render surface, with the properties
/// of the feature under the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    /// Pointer moved onto a flow line.
    FlowEnter(PairKey),
    /// Pointer left the flow-line layer.
    FlowLeave,
    /// Pointer moved onto a cell polygon.
    CellEnter(CellRef),
    /// Pointer left the cell layer.
    CellLeave,
    /// Click on a flow line.
    FlowClick(PairKey),
    /// Click on a cell polygon.
    CellClick(CellRef),
    /// Click with no feature under the pointer.
    EmptyClick,
}

// ── RenderAdapter ─────────────────────────────────────────────────────────────

/// Callbacks invoked by [`FlowSession`][crate::FlowSession] toward the
/// rendering surface.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — console sketch
///
/// ```rust,ignore
/// struct LoggingAdapter;
///
/// impl RenderAdapter for LoggingAdapter {
///     fn on_geometry(&mut self, geometry: &FlowGeometry) {
///         println!("{} arcs, {} stops", geometry.paths.len(), geometry.stops.len());
///     }
/// }
/// ```
pub trait RenderAdapter {
    /// Called after every (re)aggregation with the full geometry set.
    fn on_geometry(&mut self, _geometry: &FlowGeometry) {}

    /// Called after every state transition with the recomposed filters.
    fn on_filters(&mut self, _filters: &LayerFilters) {}

    /// Called when the session is deactivated; the surface should drop its
    /// uploaded geometry and any highlight state.
    fn on_clear(&mut self) {}
}

/// A [`RenderAdapter`] that does nothing.  Use for headless aggregation
/// runs and tests that only inspect session state.
pub struct NoopAdapter;

impl RenderAdapter for NoopAdapter {}
