//! `odf-core` — foundational types for the odflow aggregation engine.
//!
//! This crate is a dependency of every other `odf-*` crate.  It has no
//! `odf-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, equirectangular distance                   |
//! | [`cell`]   | `CellRef`, `PairKey` (directed / order-normalized)     |
//! | [`time`]   | `TimeBand` — half-open hour intervals                  |
//! | [`trip`]   | `TripRecord` + validity and band predicates            |
//! | [`config`] | `FlowConfig`, `FocusDirection`                         |
//! | [`error`]  | `FlowError`, `FlowResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required by `odf-store`.                                  |

pub mod cell;
pub mod config;
pub mod error;
pub mod geo;
pub mod time;
pub mod trip;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CellRef, PairKey};
pub use config::{FlowConfig, FocusDirection};
pub use error::{FlowError, FlowResult};
pub use geo::{GeoPoint, METERS_PER_DEG};
pub use time::TimeBand;
pub use trip::TripRecord;
