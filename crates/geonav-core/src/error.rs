use std::fmt;

/// Errors raised for invalid setup.
///
/// Every variant is an invalid-argument condition. Search timeouts and
/// unreachable goals are ordinary solver outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// A point set was built from an empty collection.
    EmptyPointSet,
    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate,
    /// The solver's start vertex is not part of the graph.
    UnknownStart,
    /// The solver's goal vertex is not part of the graph.
    UnknownGoal,
    /// A map node id that was never added.
    UnknownNode(u64),
    /// A closest-node query on a map with no node that has an edge.
    NoRoutableNodes,
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => write!(f, "invalid argument: point set is empty"),
            Self::NonFiniteCoordinate => {
                write!(f, "invalid argument: coordinate is not a finite number")
            }
            Self::UnknownStart => write!(f, "invalid argument: start vertex is not in the graph"),
            Self::UnknownGoal => write!(f, "invalid argument: goal vertex is not in the graph"),
            Self::UnknownNode(id) => write!(f, "invalid argument: unknown node {id}"),
            Self::NoRoutableNodes => write!(f, "invalid argument: map has no routable nodes"),
        }
    }
}

impl std::error::Error for GeoError {}
