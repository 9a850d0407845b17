//! Checks a hull against its input and against an expected hull.
//!
//! Everything here uses the exact orientation predicate, so "inside" and
//! "collinear" have no tolerance.

use crate::geometry::{bottom_left_cmp, orient2d};
use crate::hull::{Hull, Point, PointSet};

/// `p` lies inside or on the boundary of the hull polygon.
///
/// Degenerate hulls are a point or a closed segment.
pub fn encloses(hull: &Hull, p: Point) -> bool {
    let v = hull.vertices();
    match v.len() {
        0 => false,
        1 => v[0] == p,
        2 => on_segment(v[0], v[1], p),
        n => (0..n).all(|i| orient2d(v[i], v[(i + 1) % n], p) >= 0.0),
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orient2d(a, b, p) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Index of the first input point outside the hull, if any.
pub fn first_outside(hull: &Hull, points: &PointSet) -> Option<usize> {
    points.iter().position(|p| !encloses(hull, p))
}

/// Every turn is strictly counterclockwise and no vertex repeats.
///
/// True for degenerate hulls made of distinct vertices.
pub fn is_strictly_convex_ccw(hull: &Hull) -> bool {
    let v = hull.vertices();
    match v.len() {
        0 | 1 => true,
        2 => v[0] != v[1],
        n => (0..n).all(|i| orient2d(v[i], v[(i + 1) % n], v[(i + 2) % n]) > 0.0),
    }
}

/// First vertex is the lowest-y, then lowest-x one.
pub fn is_canonical(hull: &Hull) -> bool {
    let v = hull.vertices();
    v.iter()
        .skip(1)
        .all(|p| bottom_left_cmp(&v[0], p).is_lt())
}

/// Each reported index points at an input point equal to its vertex.
pub fn indices_consistent(hull: &Hull, points: &PointSet) -> bool {
    hull.vertices().len() == hull.indices().len()
        && hull
            .vertices()
            .iter()
            .zip(hull.indices())
            .all(|(v, &i)| points.get(i) == Some(*v))
}

/// Vertex-set difference between an expected and an actual hull.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullDiff {
    /// Expected vertices absent from the actual hull.
    pub missing: Vec<Point>,
    /// Actual vertices absent from the expectation.
    pub unexpected: Vec<Point>,
}

impl HullDiff {
    /// Order-insensitive comparison of two vertex lists.
    pub fn between(expected: &[Point], actual: &[Point]) -> Self {
        let missing = expected
            .iter()
            .filter(|p| !actual.contains(p))
            .copied()
            .collect();
        let unexpected = actual
            .iter()
            .filter(|p| !expected.contains(p))
            .copied()
            .collect();
        Self {
            missing,
            unexpected,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::compute;
    use nalgebra::point;

    fn square() -> (PointSet, Hull) {
        let ps = PointSet::from_xy([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
        let h = compute(&ps).unwrap();
        (ps, h)
    }

    #[test]
    fn containment_and_boundary() {
        let (ps, h) = square();
        assert_eq!(first_outside(&h, &ps), None);
        assert!(encloses(&h, point![4.0, 2.0]));
        assert!(!encloses(&h, point![4.0 + 1e-12, 2.0]));
        assert!(indices_consistent(&h, &ps));
        assert!(is_canonical(&h));
        assert!(is_strictly_convex_ccw(&h));
    }

    #[test]
    fn segment_containment() {
        let ps = PointSet::from_xy([(1.0, 1.0), (3.0, 3.0), (2.0, 2.0)]);
        let h = compute(&ps).unwrap();
        assert!(encloses(&h, point![2.0, 2.0]));
        assert!(!encloses(&h, point![4.0, 4.0]));
        assert_eq!(first_outside(&h, &ps), None);
    }

    #[test]
    fn clockwise_or_collinear_cycles_fail() {
        let cw = PointSet::from_xy([(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let as_is = Hull {
            vertices: cw.points().to_vec(),
            indices: vec![0, 1, 2, 3],
        };
        assert!(!is_strictly_convex_ccw(&as_is));
        let flat = Hull {
            vertices: vec![point![0.0, 0.0], point![1.0, 0.0], point![2.0, 0.0], point![1.0, 1.0]],
            indices: vec![0, 1, 2, 3],
        };
        assert!(!is_strictly_convex_ccw(&flat));
    }

    #[test]
    fn diff_reports_both_sides() {
        let expected = [point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]];
        let actual = [point![0.0, 1.0], point![0.0, 0.0], point![1.0, 1.0]];
        let d = HullDiff::between(&expected, &actual);
        assert_eq!(d.missing, vec![point![1.0, 0.0]]);
        assert_eq!(d.unexpected, vec![point![1.0, 1.0]]);
        assert!(!d.is_empty());
        assert!(HullDiff::between(&expected, &expected).is_empty());
    }
}
