use std::fmt;

/// A directed edge from `from` to `to` with a non-negative weight.
///
/// Graphs hand these out when enumerating neighbors; they are never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Create a new edge. `weight` must be non-negative.
    #[inline]
    pub fn new(from: V, to: V, weight: f64) -> Self {
        debug_assert!(weight >= 0.0, "edge weight must be non-negative");
        Self { from, to, weight }
    }

    /// Source vertex.
    #[inline]
    pub fn from(&self) -> &V {
        &self.from
    }

    /// Destination vertex.
    #[inline]
    pub fn to(&self) -> &V {
        &self.to
    }

    /// Traversal cost.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Split the edge into `(from, to, weight)`.
    #[inline]
    pub fn into_parts(self) -> (V, V, f64) {
        (self.from, self.to, self.weight)
    }
}

impl<V: fmt::Display> fmt::Display for WeightedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn edge_round_trip() {
        let e = WeightedEdge::new(1u64, 2u64, 12.75);
        let json = serde_json::to_string(&e).unwrap();
        let back: WeightedEdge<u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
