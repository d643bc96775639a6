//! Declarative layer filters composed from interaction state.
//!
//! # Composition rules
//!
//! - Flow lines: `weight ≥ threshold`, then — isolation beats focus beats
//!   nothing — either the one isolated pair, or flows matching the focused
//!   cell in the focus direction, or everything.
//! - Highlight overlay: the flow-line predicate AND equality with the
//!   isolated pair if set, else the hovered pair if set, else nothing.
//! - Self-flow bubbles: `weight ≥ threshold`, constrained to the focused
//!   cell if one is set.  Isolation does not affect bubbles.
//! - Cell highlight: the hovered cell if set, else the focused cell, else
//!   nothing.
//!
//! `LayerFilters::compose` is a pure function of the state; the session
//! recomputes it after every transition and pushes it to the render
//! adapter.  The aggregated data is never mutated — only these predicates
//! change, so the surface re-filters already-uploaded geometry.

use odf_core::{CellRef, FocusDirection, PairKey};

use odf_aggregate::AggregatedFlow;

use crate::state::{InteractionState, Selection};

// ── FlowFilter ────────────────────────────────────────────────────────────────

/// Constraint applied to flow lines beyond the weight gate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowConstraint {
    /// No selection: every thresholded flow renders.
    #[default]
    Any,
    /// Isolation: only this pair renders.
    Pair(PairKey),
    /// Focus: only flows whose stored endpoints match the cell in the
    /// given direction render.
    Endpoint {
        cell:      CellRef,
        direction: FocusDirection,
    },
}

/// Visibility predicate for the flow-line layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowFilter {
    pub min_weight: f64,
    pub constraint: FlowConstraint,
}

impl FlowFilter {
    pub fn matches(&self, key: PairKey, flow: &AggregatedFlow) -> bool {
        if flow.weight < self.min_weight {
            return false;
        }
        match self.constraint {
            FlowConstraint::Any => true,
            FlowConstraint::Pair(target) => key == target,
            FlowConstraint::Endpoint { cell, direction } => match direction {
                FocusDirection::All      => flow.origin == cell || flow.destination == cell,
                FocusDirection::Outbound => flow.origin == cell,
                FocusDirection::Inbound  => flow.destination == cell,
            },
        }
    }
}

// ── HighlightFilter ───────────────────────────────────────────────────────────

/// Visibility predicate for the hover/selection highlight overlay.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightFilter {
    pub base: FlowFilter,
    /// The single pair to highlight; `None` highlights nothing.
    pub pair: Option<PairKey>,
}

impl HighlightFilter {
    pub fn matches(&self, key: PairKey, flow: &AggregatedFlow) -> bool {
        self.pair == Some(key) && self.base.matches(key, flow)
    }
}

// ── SelfFlowFilter ────────────────────────────────────────────────────────────

/// Visibility predicate for the self-flow bubble layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfFlowFilter {
    pub min_weight: f64,
    /// Focused cell, if any.  Isolation leaves bubbles unconstrained.
    pub cell: Option<CellRef>,
}

impl SelfFlowFilter {
    pub fn matches(&self, cell: CellRef, weight: f64) -> bool {
        weight >= self.min_weight && self.cell.is_none_or(|focus| focus == cell)
    }
}

// ── CellHighlightFilter ───────────────────────────────────────────────────────

/// Visibility predicate for the cell-highlight layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellHighlightFilter {
    /// The single cell to highlight; `None` highlights nothing.
    pub cell: Option<CellRef>,
}

impl CellHighlightFilter {
    pub fn matches(&self, cell: CellRef) -> bool {
        self.cell == Some(cell)
    }
}

// ── LayerFilters ──────────────────────────────────────────────────────────────

/// The full declarative filter set, one predicate per render layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerFilters {
    pub flow:      FlowFilter,
    pub highlight: HighlightFilter,
    pub self_flow: SelfFlowFilter,
    pub cell:      CellHighlightFilter,
}

impl LayerFilters {
    /// Compose all four predicates from the current state.
    pub fn compose(state: &InteractionState) -> Self {
        let constraint = match state.selection {
            Selection::None                      => FlowConstraint::Any,
            Selection::Isolated(pair)            => FlowConstraint::Pair(pair),
            Selection::Focus { cell, direction } => FlowConstraint::Endpoint { cell, direction },
        };
        let flow = FlowFilter {
            min_weight: state.min_weight_threshold,
            constraint,
        };
        Self {
            flow,
            highlight: HighlightFilter {
                base: flow,
                pair: state.isolated_pair().or(state.hovered_pair),
            },
            self_flow: SelfFlowFilter {
                min_weight: state.min_weight_threshold,
                cell:       state.focus_cell(),
            },
            cell: CellHighlightFilter {
                cell: state.hovered_cell.or(state.focus_cell()),
            },
        }
    }
}
