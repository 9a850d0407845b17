//! Value types of the hull engine.
//!
//! - `PointSet`: owned input sequence; a point's position is its original index.
//! - `Hull`: canonical vertex cycle with the source index of every vertex.
//! - `HullCfg`: algorithm choice and collinearity tolerance.

use nalgebra::Point2;

use super::error::HullError;
use crate::geometry::normalize_zero;

/// A point of the plane. Equality is exact.
pub type Point = Point2<f64>;

/// Finite multiset of points; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps `points` as-is. Callers with untrusted data should use [`PointSet::try_new`].
    pub fn new(points: Vec<Point>) -> Self {
        let points = points
            .into_iter()
            .map(|p| Point::new(normalize_zero(p.x), normalize_zero(p.y)))
            .collect();
        Self { points }
    }

    /// Like [`PointSet::new`] but rejects NaN and infinite coordinates.
    pub fn try_new(points: Vec<Point>) -> Result<Self, HullError> {
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HullError::InvalidInput {
                index,
                reason: "non-finite coordinate",
            });
        }
        Ok(Self::new(points))
    }

    /// Builds a set from nullable coordinate pairs, e.g. CSV cells.
    ///
    /// A missing coordinate leaves the point unspecified, which is rejected.
    pub fn from_optional<I>(pairs: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
    {
        let mut points = Vec::new();
        for (index, pair) in pairs.into_iter().enumerate() {
            match pair {
                (Some(x), Some(y)) => points.push(Point::new(x, y)),
                _ => {
                    return Err(HullError::InvalidInput {
                        index,
                        reason: "missing coordinate",
                    })
                }
            }
        }
        Self::try_new(points)
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Convex hull in canonical order.
///
/// Counterclockwise, starting at the lowest-y (then lowest-x) vertex, no
/// repeated vertex and no collinear triple. Fewer than three vertices means
/// the input was degenerate (empty, a single point, or collinear).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub(crate) vertices: Vec<Point>,
    pub(crate) indices: Vec<usize>,
}

impl Hull {
    pub(crate) fn from_pairs(pairs: Vec<(Point, usize)>) -> Self {
        let (vertices, indices) = pairs.into_iter().unzip();
        Self { vertices, indices }
    }

    /// Vertex coordinates in canonical order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// 0-based input indices of the vertices, in canonical order.
    ///
    /// A vertex that occurs several times in the input reports its first index.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A point or a segment rather than a polygon.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn into_parts(self) -> (Vec<Point>, Vec<usize>) {
        (self.vertices, self.indices)
    }

    /// Re-reads the hull as a point set, e.g. to feed it back into `compute`.
    pub fn to_point_set(&self) -> PointSet {
        PointSet::new(self.vertices.clone())
    }
}

/// Hull construction algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Jarvis march; the reference semantics.
    #[default]
    GiftWrap,
    /// Andrew's monotone chain, re-canonicalized afterwards.
    MonotoneChain,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    pub algorithm: Algorithm,
    /// Orientation values with `|o| <= eps_orient` count as collinear.
    /// Zero keeps the predicate exact, which is what makes runs reproducible
    /// across input permutations.
    pub eps_orient: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::GiftWrap,
            eps_orient: 0.0,
        }
    }
}

/// Work counters of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapStats {
    /// Points in the input, duplicates included.
    pub input_len: usize,
    /// Points left after deduplication.
    pub distinct: usize,
    /// Outer steps (one per emitted edge for gift wrapping, one per
    /// processed point for monotone chain).
    pub iterations: usize,
    /// Orientation predicate evaluations.
    pub comparisons: usize,
}

/// Hull plus the counters gathered while building it.
#[derive(Clone, Debug, PartialEq)]
pub struct HullRun {
    pub hull: Hull,
    pub stats: WrapStats,
}
