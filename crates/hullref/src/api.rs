//! Curated surface for harness code (drivers, benches, property tests).
//!
//! Re-exports the pieces a test-vector pipeline needs in one place: input
//! generation, hull computation, and the checks used to judge a hull.

// Core
pub use crate::hull::{
    canonicalize, compute, Algorithm, Hull, HullCfg, HullComputer, HullError, HullRun, Point,
    PointSet, WrapStats,
};
// Inputs
pub use crate::gen::{draw_point_set, GenCfg, PointCount, ReplayToken, MAX_BOUND};
// Checks
pub use crate::verify::{
    encloses, first_outside, indices_consistent, is_canonical, is_strictly_convex_ccw, HullDiff,
};

/// A structural check that a freshly computed hull failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Hull(#[from] HullError),

    #[error("input point {0} lies outside the hull")]
    PointOutside(usize),

    #[error("hull is not strictly convex and counterclockwise")]
    NotConvex,

    #[error("hull does not start at the lowest-y, lowest-x vertex")]
    NotCanonical,

    #[error("hull indices do not match the input points")]
    IndexMismatch,
}

/// Computes the hull and runs every structural check on it.
///
/// Meant for drivers that emit expectations and must not persist a broken one.
pub fn compute_checked(points: &PointSet, cfg: HullCfg) -> Result<HullRun, CheckError> {
    let run = HullComputer::new(cfg).compute_with_stats(points)?;
    let hull = &run.hull;
    if let Some(i) = first_outside(hull, points) {
        return Err(CheckError::PointOutside(i));
    }
    if !is_strictly_convex_ccw(hull) {
        return Err(CheckError::NotConvex);
    }
    if !is_canonical(hull) {
        return Err(CheckError::NotCanonical);
    }
    if !indices_consistent(hull, points) {
        return Err(CheckError::IndexMismatch);
    }
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_run_on_generated_sets() {
        for index in 0..25 {
            let ps = draw_point_set(GenCfg::default(), ReplayToken { seed: 11, index });
            let run = compute_checked(&ps, HullCfg::default()).unwrap();
            assert!(run.hull.len() >= 3);
            assert_eq!(run.stats.iterations, run.hull.len());
            assert_eq!(run.stats.input_len, ps.len());
        }
    }

    #[test]
    fn checked_run_on_degenerate_sets() {
        let ps = PointSet::from_xy([(1.0, 1.0), (1.0, 1.0)]);
        let run = compute_checked(&ps, HullCfg::default()).unwrap();
        assert_eq!(run.hull.indices(), &[0]);
        assert_eq!(run.stats.distinct, 1);
    }

    #[test]
    fn checked_run_reports_engine_and_check_failures() {
        let square = PointSet::from_xy([
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (2.0, 2.0),
            (1.0, 3.0),
        ]);
        let wide = HullCfg {
            eps_orient: 10.0,
            ..HullCfg::default()
        };
        assert!(matches!(
            compute_checked(&square, wide),
            Err(CheckError::Hull(HullError::AlgorithmInvariantViolation(_)))
        ));

        // A huge band collapses the square to a segment that misses corners.
        let huge = HullCfg {
            algorithm: Algorithm::MonotoneChain,
            eps_orient: 1e300,
        };
        assert_eq!(
            compute_checked(&square, huge),
            Err(CheckError::PointOutside(1))
        );
    }
}
