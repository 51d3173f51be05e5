//! Geometry primitive: [`Point`].
//!
//! Map coordinates are plain `f64` pairs. For geographic data `x` holds the
//! longitude and `y` the latitude.

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D real-valued point.
///
/// Equality and hashing are by exact coordinate match, so a `Point` can key a
/// `HashMap` that maps coordinates back to graph vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

// --- trait impls for Point ---

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must hash alike.
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn finiteness() {
        assert!(Point::new(1.0, -2.5).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
        assert!(!Point::new(f64::NEG_INFINITY, 0.0).is_finite());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn hash_matches_exact_equality() {
        let mut ids = HashMap::new();
        ids.insert(Point::new(-122.25, 37.87), 42u64);
        assert_eq!(ids.get(&Point::new(-122.25, 37.87)), Some(&42));
        assert_eq!(ids.get(&Point::new(-122.25, 37.870001)), None);
    }

    #[test]
    fn signed_zero_hashes_alike() {
        let mut ids = HashMap::new();
        ids.insert(Point::new(0.0, -0.0), 1u64);
        assert_eq!(ids.get(&Point::new(-0.0, 0.0)), Some(&1));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(2.0, 3.5).to_string(), "(2, 3.5)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-122.2585, 37.8719);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
