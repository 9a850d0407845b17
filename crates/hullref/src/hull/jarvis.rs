//! Gift wrapping (Jarvis march), the reference construction.
//!
//! From the canonical start vertex, repeatedly pick the candidate `p` such
//! that no other point lies strictly right of `current → p`. Collinear ties go
//! to the farthest candidate, so only the endpoints of collinear runs become
//! vertices. The walk is counterclockwise and ends when it returns to the
//! start. O(n·h).

use std::cmp::Ordering;

use super::canon::{dedup, start_position};
use super::error::HullError;
use super::types::{Hull, HullCfg, HullRun, Point, PointSet, WrapStats};
use crate::geometry::{is_farther, orientation};

pub(crate) fn gift_wrap(points: &PointSet, cfg: &HullCfg) -> Result<HullRun, HullError> {
    let distinct = dedup(points);
    let mut stats = WrapStats {
        input_len: points.len(),
        distinct: distinct.len(),
        ..WrapStats::default()
    };
    let Some(start) = start_position(&distinct) else {
        return Ok(HullRun {
            hull: Hull::default(),
            stats,
        });
    };
    if distinct.len() == 1 {
        return Ok(HullRun {
            hull: Hull::from_pairs(distinct),
            stats,
        });
    }

    let n = distinct.len();
    let mut chain = vec![distinct[start]];
    let mut current = start;
    loop {
        stats.iterations += 1;
        if stats.iterations > n {
            return Err(HullError::AlgorithmInvariantViolation(format!(
                "gift wrapping did not close after {n} steps"
            )));
        }
        let next = next_vertex(&distinct, current, cfg.eps_orient, &mut stats.comparisons)
            .ok_or_else(|| {
                HullError::AlgorithmInvariantViolation(format!(
                    "no wrapping candidate from index {}",
                    distinct[current].1
                ))
            })?;
        if next == start {
            break;
        }
        chain.push(distinct[next]);
        current = next;
    }

    Ok(HullRun {
        hull: Hull::from_pairs(chain),
        stats,
    })
}

/// Position of the most clockwise candidate seen from `distinct[current]`.
fn next_vertex(
    distinct: &[(Point, usize)],
    current: usize,
    eps: f64,
    comparisons: &mut usize,
) -> Option<usize> {
    let origin = distinct[current].0;
    let mut best: Option<usize> = None;
    for (i, &(q, _)) in distinct.iter().enumerate() {
        if i == current {
            continue;
        }
        let Some(b) = best else {
            best = Some(i);
            continue;
        };
        let p = distinct[b].0;
        *comparisons += 1;
        match orientation(origin, p, q, eps) {
            Ordering::Less => best = Some(i),
            Ordering::Equal if same_direction(origin, p, q) && is_farther(origin, q, p) => {
                best = Some(i)
            }
            _ => {}
        }
    }
    best
}

/// `q` and `p` lie on the same side of `origin` along their common line.
#[inline]
fn same_direction(origin: Point, p: Point, q: Point) -> bool {
    (p - origin).dot(&(q - origin)) > 0.0
}
