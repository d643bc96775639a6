//! `odf-aggregate` — flow-graph aggregation and arc synthesis.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`graph`]     | `FlowGraph`, `AggregatedFlow`, `CellStats`, `StopPoint`|
//! | [`aggregate`] | [`aggregate()`] — the linear aggregation pass          |
//! | [`curve`]     | [`curve_between()`] — deterministic Bézier arcs        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod aggregate;
pub mod curve;
pub mod graph;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate;
pub use curve::curve_between;
pub use graph::{AggregatedFlow, CellStats, FlowGraph, SkipCounts, StopPoint, StopRole};
