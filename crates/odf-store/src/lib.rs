//! `odf-store` — trip dataset ingestion and the memoizing raw trip store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`loader`]  | CSV loader, `TripDataset`                               |
//! | [`geojson`] | GeoJSON `FeatureCollection` loader                      |
//! | [`store`]   | `TripSource` trait, `FileSource`, `TripStore`           |
//! | [`error`]   | `StoreError`, `StoreResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use odf_store::{FileSource, TripStore};
//!
//! let mut store = TripStore::new(FileSource::new("./data"));
//! let dataset = store.load("commutes.csv")?;    // fetches
//! let again   = store.load("commutes.csv")?;    // cached, no I/O
//! ```

pub mod error;
pub mod geojson;
pub mod loader;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use geojson::{load_trips_geojson, load_trips_geojson_reader};
pub use loader::{load_trips_csv, load_trips_reader, TripDataset};
pub use store::{FileSource, TripSource, TripStore};
