use geonav_core::{GeoError, Point};

use crate::PointSet;

/// Point set answering queries by scanning every point.
#[derive(Debug, Clone)]
pub struct NaivePointSet {
    points: Vec<Point>,
}

impl NaivePointSet {
    /// Store `points`. Fails if there are none or if any coordinate is NaN
    /// or infinite.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Result<Self, GeoError> {
        let points: Vec<Point> = points.into_iter().collect();
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeoError::NonFiniteCoordinate);
        }
        if points.is_empty() {
            return Err(GeoError::EmptyPointSet);
        }
        Ok(Self { points })
    }

    /// Number of stored points, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointSet for NaivePointSet {
    /// Ties go to the earliest stored point.
    fn nearest(&self, x: f64, y: f64) -> Point {
        let target = Point::new(x, y);
        let mut best = self.points[0];
        let mut best_d = best.distance_squared(target);
        for &p in &self.points[1..] {
            let d = p.distance_squared(target);
            if d < best_d {
                best = p;
                best_d = d;
            }
        }
        best
    }
}
