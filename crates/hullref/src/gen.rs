//! Random integer point sets for reference test vectors.
//!
//! Purpose
//! - Produce the input side of a test vector: `n` lattice points drawn
//!   uniformly from `[-bound, bound]²`, distinct by default.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so case `i` of a batch can be regenerated on its own.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::{Point, PointSet};

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Largest accepted `bound`: every integer up to 2^53 is exact in `f64`, so
/// distinct lattice points stay distinct after conversion.
pub const MAX_BOUND: i64 = 1 << 53;

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    pub count: PointCount,
    /// Coordinates are integers in `[-bound, bound]`; `|bound|` is clamped to [`MAX_BOUND`].
    pub bound: i64,
    /// Reject repeated coordinates.
    pub distinct: bool,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 10, max: 100 },
            bound: 100,
            distinct: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one point set.
///
/// With `distinct`, the requested count is clamped to the number of lattice
/// points in the box.
pub fn draw_point_set(cfg: GenCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let bound = cfg.bound.unsigned_abs().min(MAX_BOUND.unsigned_abs()) as i64;
    let mut n = cfg.count.sample(&mut rng);
    if cfg.distinct {
        let side = 2 * u128::from(bound.unsigned_abs()) + 1;
        n = n.min((side * side).min(usize::MAX as u128) as usize);
    }
    let mut seen: HashSet<(i64, i64)> = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let x = rng.gen_range(-bound..=bound);
        let y = rng.gen_range(-bound..=bound);
        if cfg.distinct && !seen.insert((x, y)) {
            continue;
        }
        points.push(Point::new(x as f64, y as f64));
    }
    PointSet::new(points)
}
