//! Nearest-neighbor queries over a fixed set of 2-D points.
//!
//! - [`KdTree`]: axis-alternating binary partition, expected O(log n) queries
//! - [`NaivePointSet`]: linear scan, useful as a reference
//!
//! Both are built once and never mutated afterwards, so they can be shared
//! across threads for concurrent reads.

mod kdtree;
mod naive;

pub use kdtree::KdTree;
pub use naive::NaivePointSet;

use geonav_core::Point;

/// A fixed set of points that can answer closest-point queries.
pub trait PointSet {
    /// The stored point closest to `(x, y)` by Euclidean distance.
    fn nearest(&self, x: f64, y: f64) -> Point;
}
