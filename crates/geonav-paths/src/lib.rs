//! Shortest-path search over abstract weighted graphs.
//!
//! The solver is written against two capabilities supplied by the caller:
//!
//! - an [`AstarGraph`] that enumerates outgoing [`WeightedEdge`]s and
//!   estimates the remaining distance to a goal,
//! - a [`MinPriorityQueue`] used as the search frontier ([`IndexedHeap`] is
//!   the default).
//!
//! [`AStarSolver`] runs the whole search inside its constructor, so every
//! accessor afterwards is O(1).
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`AstarGraph`] | graph view consumed by the solver |
//! | [`MinPriorityQueue`] | mutable frontier with decrease-key |
//! | [`ShortestPathsSolver`] | result surface of a finished solve |
//!
//! [`WeightedEdge`]: geonav_core::WeightedEdge

mod astar;
mod config;
mod queue;
mod traits;

pub use astar::{AStarSolver, SolverOutcome};
pub use config::SolverConfig;
pub use queue::IndexedHeap;
pub use traits::{AstarGraph, MinPriorityQueue, ShortestPathsSolver};
