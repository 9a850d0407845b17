//! Convex hull reference engine.
//!
//! Computes canonical convex hulls of 2D point multisets for use as ground
//! truth when testing other hull implementations, and draws the random
//! point sets those test vectors are built from.
//!
//! API Policy
//! - `hull` is the stable core: `compute`, `HullComputer`, `Hull`, `PointSet`.
//! - `gen` and `verify` are harness helpers and may change with the driver.

pub mod api;
pub mod gen;
pub mod geometry;
pub mod hull;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute, Hull, HullComputer, HullError, Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{draw_point_set, GenCfg, PointCount, ReplayToken, MAX_BOUND};
    pub use crate::hull::{
        canonicalize, compute, Algorithm, Hull, HullCfg, HullComputer, HullError, HullRun, Point,
        PointSet, WrapStats,
    };
    pub use crate::verify::HullDiff;
}
