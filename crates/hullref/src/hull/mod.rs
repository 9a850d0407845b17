//! Convex hull reference engine.
//!
//! Purpose
//! - Compute the convex hull of a finite 2D multiset as a canonical vertex
//!   cycle: counterclockwise, starting at the lowest-y (then lowest-x)
//!   vertex, no duplicates, no collinear triples.
//! - Serve as ground truth, so determinism beats speed: the result is
//!   independent of input order and bit-identical across runs.
//!
//! Degeneracy
//! - Duplicates are removed before the walk; a vertex reports its first index.
//! - 0 points → empty hull, 1 → that point, 2 distinct or all collinear → the
//!   two extreme endpoints, start vertex first.
//!
//! Code cross-refs: `HullComputer`, `Hull`, `PointSet`, `canonicalize`

mod canon;
mod error;
mod jarvis;
mod monotone;
mod types;

pub use canon::canonicalize;
pub use error::HullError;
pub use types::{Algorithm, Hull, HullCfg, HullRun, Point, PointSet, WrapStats};

/// Hull computation with a fixed configuration.
///
/// Holds no state besides the configuration; share it freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullComputer {
    pub cfg: HullCfg,
}

impl HullComputer {
    #[inline]
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }

    pub fn compute(&self, points: &PointSet) -> Result<Hull, HullError> {
        self.compute_with_stats(points).map(|run| run.hull)
    }

    /// Like [`HullComputer::compute`], also returning the work counters.
    pub fn compute_with_stats(&self, points: &PointSet) -> Result<HullRun, HullError> {
        match self.cfg.algorithm {
            Algorithm::GiftWrap => jarvis::gift_wrap(points, &self.cfg),
            Algorithm::MonotoneChain => monotone::monotone_chain(points, &self.cfg),
        }
    }
}

/// Canonical hull of `points` by gift wrapping with exact predicates.
pub fn compute(points: &PointSet) -> Result<Hull, HullError> {
    HullComputer::default().compute(points)
}
