//! Deterministic arc synthesis for flow de-overlap.
//!
//! # Why deterministic
//!
//! Hover highlights are drawn as a second geometry layer over the base
//! flow lines.  Both layers synthesize their arcs independently, possibly
//! on different render passes after a filter change — so the arc for a
//! given pair key must come out identical every time, pixel for pixel.
//! The bow's sign and magnitude therefore derive from an `FxHasher` hash
//! of the seed string (the pair key's stable textual form), never from
//! mutable random state.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use odf_core::GeoPoint;

/// Bow magnitude range as a fraction of the straight-line span.
const MIN_BOW: f64 = 0.20;
const MAX_BOW: f64 = 0.38;

/// Substitute span for zero-distance endpoints.  Same-cell trips are
/// handled separately as self-flow bubbles, so this only guards against
/// pathological input.
const MIN_SPAN_DEG: f64 = 1e-9;

/// Synthesize a smooth arc from `a` to `b` with `steps + 1` points.
///
/// The arc is a quadratic Bézier whose control point sits off the segment
/// midpoint along the perpendicular; which side and how far (20–38 % of
/// the span) are functions of `seed` alone.  Calling twice with identical
/// arguments yields identical point sequences.
pub fn curve_between(a: GeoPoint, b: GeoPoint, seed: &str, steps: usize) -> Vec<GeoPoint> {
    let hash = seed_hash(seed);
    let side = if hash & 1 == 0 { 1.0 } else { -1.0 };
    let bow  = MIN_BOW + (MAX_BOW - MIN_BOW) * (((hash >> 1) % 1024) as f64 / 1023.0);

    let dx = b.lon - a.lon;
    let dy = b.lat - a.lat;
    let span = (dx * dx + dy * dy).sqrt().max(MIN_SPAN_DEG);

    // Unit perpendicular of the segment, scaled to the bow offset.
    let offset = span * bow * side;
    let control = GeoPoint {
        lon: (a.lon + b.lon) * 0.5 + (-dy / span) * offset,
        lat: (a.lat + b.lat) * 0.5 + (dx / span) * offset,
    };

    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let u = 1.0 - t;
            GeoPoint {
                lon: u * u * a.lon + 2.0 * u * t * control.lon + t * t * b.lon,
                lat: u * u * a.lat + 2.0 * u * t * control.lat + t * t * b.lat,
            }
        })
        .collect()
}

/// Stable 64-bit hash of the seed string.  FxHash carries no per-process
/// randomization, so the value survives across render passes and runs.
fn seed_hash(seed: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(seed.as_bytes());
    hasher.finish()
}
