//! `odf-grid` — bounding envelope and cell grid for the odflow engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`envelope`] | `GridEnvelope` — dataset extent + mean latitude     |
//! | [`grid`]     | `CellGrid` — coordinate ↔ cell conversion           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod envelope;
pub mod grid;

#[cfg(test)]
mod tests;

pub use envelope::GridEnvelope;
pub use grid::CellGrid;
