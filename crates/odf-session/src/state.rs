//! Interaction state — hover, selection, and the weight threshold.
//!
//! # Structural mutual exclusion
//!
//! Focusing a cell and isolating a single flow are mutually exclusive by
//! the data model: both live in one [`Selection`] enum, so setting either
//! replaces the other.  There is nothing to check after the fact and no
//! invalid combination to detect.
//!
//! State is owned by its session instance — two sessions (or two tests)
//! never share hover or selection through hidden module state.

use odf_core::{CellRef, FocusDirection, PairKey};

// ── Selection ─────────────────────────────────────────────────────────────────

/// The click-selected view constraint.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// No constraint: all weight-thresholded flows render.
    #[default]
    None,
    /// One cell constrains the view, with a direction mode.
    Focus {
        cell:      CellRef,
        direction: FocusDirection,
    },
    /// Exactly one flow pair renders, overriding any focus.
    Isolated(PairKey),
}

// ── InteractionState ──────────────────────────────────────────────────────────

/// Hover/selection/threshold state for one aggregation session.
///
/// Transition methods are the only mutation surface; each corresponds to
/// one user gesture reported by the render surface.  Hover transitions are
/// last-write-wins (rapid pointer moves may supersede each other); click
/// transitions are applied strictly in event order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionState {
    /// Minimum aggregated weight for a flow to pass the weight gate.
    pub min_weight_threshold: f64,
    /// Flow pair currently under the pointer, if any.
    pub hovered_pair: Option<PairKey>,
    /// Cell currently under the pointer, if any.
    pub hovered_cell: Option<CellRef>,
    /// Click-selected constraint (focus or isolation, never both).
    pub selection: Selection,
}

impl InteractionState {
    pub fn new(min_weight_threshold: f64) -> Self {
        Self {
            min_weight_threshold,
            ..Self::default()
        }
    }

    // ── Hover transitions ─────────────────────────────────────────────────

    /// Pointer entered a flow line.
    pub fn hover_flow_enter(&mut self, pair: PairKey) {
        self.hovered_pair = Some(pair);
    }

    /// Pointer left the flow layer.
    pub fn hover_flow_leave(&mut self) {
        self.hovered_pair = None;
    }

    /// Pointer entered a cell.
    pub fn hover_cell_enter(&mut self, cell: CellRef) {
        self.hovered_cell = Some(cell);
    }

    /// Pointer left the cell layer.
    pub fn hover_cell_leave(&mut self) {
        self.hovered_cell = None;
    }

    // ── Click transitions ─────────────────────────────────────────────────

    /// Click on a flow line: isolate its pair (clearing any focus).
    pub fn click_flow(&mut self, pair: PairKey) {
        self.selection = Selection::Isolated(pair);
    }

    /// Click on a cell: focus it (clearing any isolation).
    pub fn click_cell(&mut self, cell: CellRef, direction: FocusDirection) {
        self.selection = Selection::Focus { cell, direction };
    }

    /// Click on empty canvas: clear focus and isolation alike.
    pub fn click_empty(&mut self) {
        self.selection = Selection::None;
    }

    // ── Other transitions ─────────────────────────────────────────────────

    /// Externally-set weight gate.  Leaves hover and selection untouched.
    pub fn set_threshold(&mut self, min_weight: f64) {
        self.min_weight_threshold = min_weight;
    }

    /// Change the direction mode of an active focus in place.  No-op when
    /// nothing is focused.
    pub fn set_focus_direction(&mut self, direction: FocusDirection) {
        if let Selection::Focus { cell, .. } = self.selection {
            self.selection = Selection::Focus { cell, direction };
        }
    }

    /// Reset everything except the threshold's default — used when the
    /// consuming view is deactivated.
    pub fn clear(&mut self) {
        self.hovered_pair = None;
        self.hovered_cell = None;
        self.selection = Selection::None;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The focused cell, if the selection is a focus.
    pub fn focus_cell(&self) -> Option<CellRef> {
        match self.selection {
            Selection::Focus { cell, .. } => Some(cell),
            _ => None,
        }
    }

    /// The isolated pair, if the selection is an isolation.
    pub fn isolated_pair(&self) -> Option<PairKey> {
        match self.selection {
            Selection::Isolated(pair) => Some(pair),
            _ => None,
        }
    }
}
