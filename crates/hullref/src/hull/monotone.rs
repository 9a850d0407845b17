use std::cmp::Ordering;

use super::canon::{canonicalize, dedup};
use super::error::HullError;
use super::types::{HullCfg, HullRun, Point, PointSet, WrapStats};
use crate::geometry::orientation;

/// Andrew’s monotone chain, re-sorted into canonical order.
///
/// Its natural output starts at the lexicographically smallest point; the
/// cycle is rotated so results compare bit-for-bit with gift wrapping.
pub(crate) fn monotone_chain(points: &PointSet, cfg: &HullCfg) -> Result<HullRun, HullError> {
    let pts = dedup(points);
    let mut stats = WrapStats {
        input_len: points.len(),
        distinct: pts.len(),
        ..WrapStats::default()
    };
    if pts.len() < 3 {
        return Ok(HullRun {
            hull: canonicalize(pts),
            stats,
        });
    }

    let mut turns_left = |a: Point, b: Point, c: Point| {
        stats.comparisons += 1;
        orientation(a, b, c, cfg.eps_orient) == Ordering::Greater
    };
    let mut lower: Vec<(Point, usize)> = Vec::with_capacity(pts.len());
    for p in &pts {
        while let &[.., a, b] = lower.as_slice() {
            if turns_left(a.0, b.0, p.0) {
                break;
            }
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<(Point, usize)> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while let &[.., a, b] = upper.as_slice() {
            if turns_left(a.0, b.0, p.0) {
                break;
            }
            upper.pop();
        }
        upper.push(*p);
    }
    stats.iterations = 2 * pts.len();
    lower.pop();
    upper.pop();
    let mut cycle = lower;
    cycle.extend(upper);
    if cycle.len() > pts.len() {
        return Err(HullError::AlgorithmInvariantViolation(format!(
            "monotone chain produced {} vertices from {} points",
            cycle.len(),
            pts.len()
        )));
    }
    Ok(HullRun {
        hull: canonicalize(cycle),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::jarvis::gift_wrap;

    #[test]
    fn matches_gift_wrap_on_mixed_input() {
        let ps = PointSet::from_xy([
            (0.0, 3.0),
            (2.0, 2.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (3.0, 0.0),
            (0.0, 0.0),
            (3.0, 3.0),
            (1.5, 0.0),
        ]);
        let cfg = HullCfg::default();
        let a = monotone_chain(&ps, &cfg).unwrap();
        let b = gift_wrap(&ps, &cfg).unwrap();
        assert_eq!(a.hull, b.hull);
        assert_eq!(a.hull.indices(), &[5, 4, 6, 0]);
    }

    #[test]
    fn collinear_input_is_a_segment() {
        let ps = PointSet::from_xy([(2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]);
        let r = monotone_chain(&ps, &HullCfg::default()).unwrap();
        assert_eq!(r.hull.indices(), &[1, 2]);
    }
}
