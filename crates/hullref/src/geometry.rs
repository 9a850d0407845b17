//! Exact 2D predicates shared by the hull algorithms and the verifiers.
//!
//! Orientation signs come from adaptive-precision arithmetic (`robust`), so a
//! zero really means collinear and tie-breaking does not depend on rounding.

use std::cmp::Ordering;

use nalgebra::Point2;

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// - `> 0`: `c` lies left of the directed line `a → b` (counterclockwise turn)
/// - `< 0`: `c` lies right of it (clockwise turn)
/// - `== 0`: collinear
///
/// The sign is exact; the magnitude is accurate to a few ulps.
#[inline]
pub fn orient2d(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Orientation with a collinearity band of half-width `eps` (`eps == 0` is exact).
#[inline]
pub fn orientation(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>, eps: f64) -> Ordering {
    let o = orient2d(a, b, c);
    if o.abs() <= eps {
        Ordering::Equal
    } else if o > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Lowest y first, ties broken by lowest x. The canonical start vertex is the minimum.
#[inline]
pub fn bottom_left_cmp(a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

/// Lowest x first, ties broken by lowest y.
#[inline]
pub fn lexicographic_cmp(a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// For `a` and `b` on the same ray from `origin`, returns `true` if `a` is strictly farther.
///
/// Compares coordinate offsets instead of squared norms: rounding of a
/// difference is monotone, so a strict answer here is always correct. When
/// both offsets round to the same value the raw coordinates decide.
pub fn is_farther(origin: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> bool {
    let da = a - origin;
    let db = b - origin;
    match da
        .x
        .abs()
        .total_cmp(&db.x.abs())
        .then(da.y.abs().total_cmp(&db.y.abs()))
    {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            if a.x != b.x {
                (a.x - b.x) * da.x.signum() > 0.0
            } else {
                (a.y - b.y) * da.y.signum() > 0.0
            }
        }
    }
}

/// Signed area of a closed polygon (positive for counterclockwise order).
pub fn signed_area(verts: &[Point2<f64>]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..verts.len() {
        let p = verts[i].coords;
        let q = verts[(i + 1) % verts.len()].coords;
        twice += p.perp(&q);
    }
    0.5 * twice
}

/// Maps `-0.0` to `0.0` so exact equality and total ordering agree.
#[inline]
pub(crate) fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
