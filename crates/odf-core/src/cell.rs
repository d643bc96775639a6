//! Grid cell references and flow pair keys.
//!
//! # Key normalization
//!
//! An aggregated flow between two distinct cells is identified by a
//! [`PairKey`].  In directed mode the key preserves `(origin, destination)`
//! order, so A→B and B→A aggregate separately.  In undirected mode the key
//! stores the `Ord`-smaller cell first, so both directions collapse onto
//! one entry regardless of which record is seen first.
//!
//! Keys are plain composite value types — two `(i32, i32)` pairs — usable
//! directly as hash-map keys with no string formatting or parsing.

use std::fmt;

// ── CellRef ───────────────────────────────────────────────────────────────────

/// A fixed-size rectangular spatial bucket, identified by integer row and
/// column within the dataset's grid envelope.
///
/// Rows grow northward (latitude), columns eastward (longitude).  Indices
/// may be negative for coordinates below/west of the envelope minimum,
/// which only occurs for degenerate float edge cases; ordinary dataset
/// points map to non-negative indices.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    pub row: i32,
    pub col: i32,
}

impl CellRef {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

// ── PairKey ───────────────────────────────────────────────────────────────────

/// Identifier of an aggregated flow between two distinct cells.
///
/// Construct with [`directed`](PairKey::directed) or
/// [`undirected`](PairKey::undirected); the latter normalizes endpoint
/// order so the key is direction-insensitive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairKey {
    pub a: CellRef,
    pub b: CellRef,
}

impl PairKey {
    /// Direction-sensitive key: `a` is the origin cell, `b` the destination.
    #[inline]
    pub fn directed(origin: CellRef, destination: CellRef) -> Self {
        Self { a: origin, b: destination }
    }

    /// Order-normalized key: the smaller cell (by `Ord`) is always stored
    /// first, so `undirected(x, y) == undirected(y, x)`.
    #[inline]
    pub fn undirected(origin: CellRef, destination: CellRef) -> Self {
        if destination < origin {
            Self { a: destination, b: origin }
        } else {
            Self { a: origin, b: destination }
        }
    }

    /// Dispatch on the aggregation mode.
    #[inline]
    pub fn new(origin: CellRef, destination: CellRef, undirected: bool) -> Self {
        if undirected {
            Self::undirected(origin, destination)
        } else {
            Self::directed(origin, destination)
        }
    }

    /// `true` if either endpoint of the key is `cell`.
    #[inline]
    pub fn touches(&self, cell: CellRef) -> bool {
        self.a == cell || self.b == cell
    }
}

impl fmt::Display for PairKey {
    /// Stable textual form, e.g. `"3,-2>7,4"`.  Used as the curve
    /// synthesizer's seed string, so the format must not change between
    /// renders of the same session.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.a, self.b)
    }
}
