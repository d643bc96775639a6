//! The `FlowSession` — one active aggregation session over one dataset.
//!
//! # Re-aggregation vs filter-only updates
//!
//! Changing the time band, the direction mode, or the dataset re-runs the
//! full aggregation pass and rebuilds geometry.  Changing the weight
//! threshold, hover, focus, or isolation only recomposes the declarative
//! filters — the aggregated graph and uploaded geometry are reused.
//! Keeping cheap updates on the cheap path is the central performance
//! invariant of the engine.
//!
//! The grid is computed **once** from the full unfiltered dataset at
//! construction and never rebuilt; a focused cell stays addressable
//! across every time-band change.

use odf_core::{FlowConfig, FocusDirection, TimeBand, TripRecord};
use odf_grid::{CellGrid, GridEnvelope};

use odf_aggregate::{aggregate, FlowGraph, SkipCounts};

use crate::adapter::{PointerEvent, RenderAdapter};
use crate::filter::LayerFilters;
use crate::geometry::{build_geometry, FlowGeometry};
use crate::state::InteractionState;
use crate::{SessionError, SessionResult};

/// One view's aggregation session: owns the dataset reference, the grid,
/// the current graph/geometry, and all interaction state.
///
/// The render adapter is a collaborator, not a field — every method that
/// can change what the surface shows takes it as `&mut`, mirroring how
/// the surface's event loop already owns both halves.
pub struct FlowSession {
    config:   FlowConfig,
    trips:    Vec<TripRecord>,
    grid:     CellGrid,
    band:     Option<TimeBand>,
    graph:    FlowGraph,
    geometry: FlowGeometry,
    state:    InteractionState,
    filters:  LayerFilters,
    /// Event wiring guard, per instance: a second `attach` is a no-op.
    attached: bool,
    /// In-flight guard: rejects aggregation triggers issued while a pass
    /// is still being delivered (e.g. from a deferred adapter callback).
    aggregating: bool,
}

impl FlowSession {
    /// Build a session over `trips`.
    ///
    /// Computes the envelope and grid from the full unfiltered dataset,
    /// then runs the initial aggregation pass.  Nothing is pushed to any
    /// adapter until [`attach`](Self::attach).
    pub fn new(trips: Vec<TripRecord>, config: FlowConfig) -> SessionResult<Self> {
        config.validate()?;

        let grid = CellGrid::new(GridEnvelope::from_trips(&trips), config.base_cell_size_meters);
        let graph = aggregate(&trips, None, &grid, config.undirected);
        let geometry = build_geometry(&graph, &grid, &config);
        let state = InteractionState::new(config.min_weight_threshold);
        let filters = LayerFilters::compose(&state);

        Ok(Self {
            config,
            trips,
            grid,
            band: None,
            graph,
            geometry,
            state,
            filters,
            attached: false,
            aggregating: false,
        })
    }

    // ── Adapter lifecycle ─────────────────────────────────────────────────

    /// Wire the session to a rendering surface: pushes the current
    /// geometry and filters.  Idempotent — a second call on an already
    /// attached session does nothing, so event wiring is never duplicated.
    pub fn attach<A: RenderAdapter>(&mut self, adapter: &mut A) {
        if self.attached {
            return;
        }
        self.attached = true;
        adapter.on_geometry(&self.geometry);
        adapter.on_filters(&self.filters);
    }

    /// Deactivate the session: clears all interaction state and tells the
    /// surface to drop its uploaded geometry.  A dataset fetch completing
    /// after this point must be discarded by the caller, never fed back in.
    pub fn deactivate<A: RenderAdapter>(&mut self, adapter: &mut A) {
        self.state.clear();
        self.filters = LayerFilters::compose(&self.state);
        self.attached = false;
        adapter.on_clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── Structural updates (re-aggregate) ─────────────────────────────────

    /// Select the active time band (`None` = include everything) and
    /// re-aggregate.  The grid is untouched.
    pub fn set_time_band<A: RenderAdapter>(
        &mut self,
        band:    Option<TimeBand>,
        adapter: &mut A,
    ) -> SessionResult<()> {
        self.band = band;
        self.reaggregate(adapter)
    }

    /// Switch between directed and order-normalized aggregation.
    pub fn set_undirected<A: RenderAdapter>(
        &mut self,
        undirected: bool,
        adapter:    &mut A,
    ) -> SessionResult<()> {
        if self.config.undirected == undirected {
            return Ok(());
        }
        self.config.undirected = undirected;
        self.reaggregate(adapter)
    }

    fn reaggregate<A: RenderAdapter>(&mut self, adapter: &mut A) -> SessionResult<()> {
        if self.aggregating {
            return Err(SessionError::AggregationInFlight);
        }
        self.aggregating = true;

        self.graph = aggregate(
            &self.trips,
            self.band.as_ref(),
            &self.grid,
            self.config.undirected,
        );
        self.geometry = build_geometry(&self.graph, &self.grid, &self.config);
        self.filters = LayerFilters::compose(&self.state);

        if self.attached {
            adapter.on_geometry(&self.geometry);
            adapter.on_filters(&self.filters);
        }
        self.aggregating = false;
        Ok(())
    }

    // ── Filter-only updates ───────────────────────────────────────────────

    /// Change the weight gate.  No re-aggregation; selection untouched.
    pub fn set_min_weight_threshold<A: RenderAdapter>(&mut self, min_weight: f64, adapter: &mut A) {
        self.state.set_threshold(min_weight);
        self.push_filters(adapter);
    }

    /// Change the direction mode used by cell focus.  Applies to the
    /// active focus immediately and to subsequent cell clicks.
    pub fn set_focus_direction<A: RenderAdapter>(
        &mut self,
        direction: FocusDirection,
        adapter:   &mut A,
    ) {
        self.config.focus_direction = direction;
        self.state.set_focus_direction(direction);
        self.push_filters(adapter);
    }

    /// Apply one pointer event from the render surface.
    ///
    /// Events are applied in delivery order; hover events are
    /// last-write-wins by nature of the transitions.
    pub fn handle_pointer<A: RenderAdapter>(&mut self, event: PointerEvent, adapter: &mut A) {
        match event {
            PointerEvent::FlowEnter(pair) => self.state.hover_flow_enter(pair),
            PointerEvent::FlowLeave       => self.state.hover_flow_leave(),
            PointerEvent::CellEnter(cell) => self.state.hover_cell_enter(cell),
            PointerEvent::CellLeave       => self.state.hover_cell_leave(),
            PointerEvent::FlowClick(pair) => self.state.click_flow(pair),
            PointerEvent::CellClick(cell) => {
                self.state.click_cell(cell, self.config.focus_direction)
            }
            PointerEvent::EmptyClick      => self.state.click_empty(),
        }
        self.push_filters(adapter);
    }

    fn push_filters<A: RenderAdapter>(&mut self, adapter: &mut A) {
        self.filters = LayerFilters::compose(&self.state);
        if self.attached {
            adapter.on_filters(&self.filters);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn time_band(&self) -> Option<&TimeBand> {
        self.band.as_ref()
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn geometry(&self) -> &FlowGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn filters(&self) -> &LayerFilters {
        &self.filters
    }

    /// Records excluded from the most recent aggregation pass.
    pub fn skipped(&self) -> SkipCounts {
        self.graph.skipped
    }
}

#[cfg(test)]
impl FlowSession {
    /// Force the in-flight flag so tests can exercise the guard.
    pub(crate) fn set_aggregating_for_test(&mut self, aggregating: bool) {
        self.aggregating = aggregating;
    }
}
