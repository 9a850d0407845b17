//! Deduplication and canonical ordering.

use super::types::{Hull, Point, PointSet};
use crate::geometry::{bottom_left_cmp, lexicographic_cmp, orient2d};

/// Distinct points of `points`, each paired with its first input index.
///
/// The result is sorted lexicographically (x, then y), so it does not depend
/// on the input order.
pub(crate) fn dedup(points: &PointSet) -> Vec<(Point, usize)> {
    let mut pairs: Vec<(Point, usize)> = points.iter().zip(0..).collect();
    pairs.sort_by(|a, b| lexicographic_cmp(&a.0, &b.0).then(a.1.cmp(&b.1)));
    pairs.dedup_by(|later, earlier| later.0 == earlier.0);
    pairs
}

/// Position of the canonical start vertex (lowest y, then lowest x).
pub(crate) fn start_position(pairs: &[(Point, usize)]) -> Option<usize> {
    pairs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| bottom_left_cmp(&a.0, &b.0))
        .map(|(i, _)| i)
}

/// Rotates a closed vertex cycle into canonical form.
///
/// The cycle may start anywhere and run in either direction; it is assumed
/// to be strictly convex. Two-vertex cycles are ordered start-first.
pub fn canonicalize(mut cycle: Vec<(Point, usize)>) -> Hull {
    let Some(start) = start_position(&cycle) else {
        return Hull::default();
    };
    cycle.rotate_left(start);
    if cycle.len() >= 3 {
        let n = cycle.len();
        // The start vertex is a strict corner, so the turn there gives the direction.
        if orient2d(cycle[n - 1].0, cycle[0].0, cycle[1].0) < 0.0 {
            cycle[1..].reverse();
        }
    }
    Hull::from_pairs(cycle)
}
