//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use crate::{FlowError, FlowResult};

// ── FocusDirection ────────────────────────────────────────────────────────────

/// Which flows a focused cell constrains the view to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusDirection {
    /// Flows touching the cell as either endpoint.
    #[default]
    All,
    /// Only flows leaving the cell.
    Outbound,
    /// Only flows arriving at the cell.
    Inbound,
}

impl fmt::Display for FocusDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FocusDirection::All      => "all",
            FocusDirection::Outbound => "out",
            FocusDirection::Inbound  => "in",
        };
        f.write_str(s)
    }
}

impl FromStr for FocusDirection {
    type Err = FlowError;

    fn from_str(s: &str) -> FlowResult<Self> {
        match s.trim() {
            "all" => Ok(FocusDirection::All),
            "out" => Ok(FocusDirection::Outbound),
            "in"  => Ok(FocusDirection::Inbound),
            other => Err(FlowError::Parse(format!(
                "invalid focus direction {other:?}: expected \"all\", \"out\", or \"in\""
            ))),
        }
    }
}

// ── FlowConfig ────────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Typically built once per view from UI controls and handed to the
/// session.  Changing `undirected` requires re-aggregation; changing
/// `min_weight_threshold` or `focus_direction` only recomposes filters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowConfig {
    /// Target cell edge length in metres.  The grid converts this to
    /// latitude-corrected angular cell sizes once per dataset.
    pub base_cell_size_meters: f64,

    /// Aggregate A→B and B→A into one order-normalized flow.
    pub undirected: bool,

    /// Minimum aggregated weight for a flow (or self-flow) to render.
    pub min_weight_threshold: f64,

    /// Direction mode applied when a cell is focused.
    pub focus_direction: FocusDirection,

    /// Materialize polygons for every cell of the dense envelope grid, so
    /// zero-traffic cells are still selectable.  Off by default: only
    /// cells with traffic are emitted.
    pub show_all_cells: bool,

    /// Segment count per synthesized flow arc (the arc has
    /// `curve_steps + 1` points).
    pub curve_steps: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            base_cell_size_meters: 100.0,
            undirected:            false,
            min_weight_threshold:  1.0,
            focus_direction:       FocusDirection::All,
            show_all_cells:        false,
            curve_steps:           24,
        }
    }
}

impl FlowConfig {
    /// Validate values that would silently corrupt the grid.
    pub fn validate(&self) -> FlowResult<()> {
        if !self.base_cell_size_meters.is_finite() || self.base_cell_size_meters <= 0.0 {
            return Err(FlowError::Config(format!(
                "base_cell_size_meters must be positive and finite, got {}",
                self.base_cell_size_meters
            )));
        }
        if !self.min_weight_threshold.is_finite() {
            return Err(FlowError::Config("min_weight_threshold must be finite".into()));
        }
        Ok(())
    }
}
