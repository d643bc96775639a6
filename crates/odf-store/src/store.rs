//! The memoizing raw trip store.
//!
//! One immutable dataset per source identifier.  A successful load is
//! cached forever (identity-of-source is the only invalidation); a failed
//! load is never cached, so a later retry with the same identifier
//! attempts the fetch again.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::geojson::load_trips_geojson;
use crate::loader::{load_trips_csv, TripDataset};
use crate::{StoreError, StoreResult};

// ── TripSource ────────────────────────────────────────────────────────────────

/// Pluggable dataset backend.
///
/// Implementations resolve a source identifier to a full trip dataset —
/// from disk, an object store, or an HTTP endpoint.  The store never
/// interprets the identifier itself.
pub trait TripSource {
    fn fetch(&self, source_id: &str) -> StoreResult<TripDataset>;
}

// ── FileSource ────────────────────────────────────────────────────────────────

/// A [`TripSource`] that resolves identifiers to files under a root
/// directory, dispatching the loader on extension.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TripSource for FileSource {
    fn fetch(&self, source_id: &str) -> StoreResult<TripDataset> {
        let path = self.root.join(source_id);
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv")              => load_trips_csv(&path),
            Some("json" | "geojson") => load_trips_geojson(&path),
            other => Err(StoreError::UnsupportedFormat(format!(
                "{} (extension {:?})",
                path.display(),
                other.unwrap_or("none"),
            ))),
        }
    }
}

// ── TripStore ─────────────────────────────────────────────────────────────────

/// Memoizing front of a [`TripSource`].
///
/// Loaded datasets are shared as `Arc`s: the aggregation session and the
/// store can hold the same immutable data without copying, and a dataset
/// still referenced by a live session survives cache churn.
pub struct TripStore<S: TripSource> {
    source: S,
    cache:  HashMap<String, Arc<TripDataset>>,
}

impl<S: TripSource> TripStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Fetch (or return the cached) dataset for `source_id`.
    ///
    /// Errors propagate to the caller and leave the cache untouched.
    pub fn load(&mut self, source_id: &str) -> StoreResult<Arc<TripDataset>> {
        if let Some(dataset) = self.cache.get(source_id) {
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(self.source.fetch(source_id)?);
        self.cache
            .insert(source_id.to_owned(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// `true` if `source_id` has a cached dataset.
    pub fn is_cached(&self, source_id: &str) -> bool {
        self.cache.contains_key(source_id)
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
