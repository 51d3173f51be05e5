use geonav_core::WeightedEdge;

use crate::SolverOutcome;

/// Graph view consumed by the A* solver.
///
/// Implementations are read-only during a solve; several solvers may share
/// one graph from different threads as long as the type is `Sync`.
pub trait AstarGraph<V> {
    /// Append the edges leaving `v` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, v: &V, buf: &mut Vec<WeightedEdge<V>>);

    /// Estimate of the remaining cost from `v` to `goal`.
    /// Must be non-negative and never overestimate for the path to be optimal.
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64;

    /// Whether `v` belongs to the graph. Every vertex does unless overridden.
    fn contains_vertex(&self, _v: &V) -> bool {
        true
    }
}

/// Mutable min-priority queue used as the search frontier.
pub trait MinPriorityQueue<T> {
    /// Add `item` with `priority`. Returns `false` and leaves the queue
    /// untouched if `item` is already present.
    fn insert(&mut self, item: T, priority: f64) -> bool;

    /// Item with the smallest priority.
    fn peek(&self) -> Option<&T>;

    /// Remove and return the item with the smallest priority.
    fn poll(&mut self) -> Option<T>;

    /// Number of items.
    fn len(&self) -> usize;

    /// Whether the queue holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `item` is in the queue.
    fn contains(&self, item: &T) -> bool;

    /// Set the priority of an existing item. Returns `false` if absent.
    fn change_priority(&mut self, item: &T, priority: f64) -> bool;
}

/// Result surface of a finished shortest-path solve.
pub trait ShortestPathsSolver<V> {
    /// How the search ended: solved, timed out, or exhausted the frontier.
    fn outcome(&self) -> SolverOutcome;

    /// Vertices from start to goal. Empty unless solved.
    fn solution(&self) -> &[V];

    /// Total weight of [`solution`](Self::solution). Zero unless solved.
    fn solution_weight(&self) -> f64;

    /// Number of frontier dequeues performed.
    fn num_states_explored(&self) -> usize;

    /// Wall-clock seconds spent solving.
    fn exploration_time(&self) -> f64;
}
