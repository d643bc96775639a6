//! `odf-session` — interaction state, filter composition, and the render
//! boundary for the odflow engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `InteractionState`, `Selection`                         |
//! | [`filter`]   | `LayerFilters` and the per-layer predicates             |
//! | [`adapter`]  | `RenderAdapter` trait, `PointerEvent`, `NoopAdapter`    |
//! | [`geometry`] | `FlowGeometry` and its builder                          |
//! | [`session`]  | `FlowSession` — the per-view orchestrator               |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod adapter;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod session;
pub mod state;


pub use adapter::{NoopAdapter, PointerEvent, RenderAdapter};
pub use error::{SessionError, SessionResult};
pub use filter::{
    CellHighlightFilter, FlowConstraint, FlowFilter, HighlightFilter, LayerFilters, SelfFlowFilter,
};
pub use geometry::{build_geometry, CellPolygon, FlowGeometry, FlowPath, SelfFlowPoint};
pub use session::FlowSession;
pub use state::{InteractionState, Selection};
