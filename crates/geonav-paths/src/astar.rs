use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use geonav_core::GeoError;

use crate::config::SolverConfig;
use crate::queue::IndexedHeap;
use crate::traits::{AstarGraph, MinPriorityQueue, ShortestPathsSolver};

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverOutcome {
    /// The goal was reached within the time budget.
    Solved,
    /// The time budget ran out first.
    Timeout,
    /// The frontier emptied without reaching the goal.
    Unsolvable,
}

impl fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Solved => "solved",
            Self::Timeout => "timeout",
            Self::Unsolvable => "unsolvable",
        };
        f.write_str(s)
    }
}

/// A* shortest-path solver.
///
/// The search runs to completion inside the constructor; the solver is then
/// an immutable record of the result.
#[derive(Debug, Clone)]
pub struct AStarSolver<V> {
    outcome: SolverOutcome,
    solution: Vec<V>,
    solution_weight: f64,
    num_states_explored: usize,
    elapsed: Duration,
}

impl<V: Eq + Hash + Clone> AStarSolver<V> {
    /// Find the shortest path from `start` to `goal` using an [`IndexedHeap`] frontier.
    ///
    /// Fails only if `start` or `goal` is not part of `graph`.
    pub fn new<G>(graph: &G, start: V, goal: V, config: &SolverConfig) -> Result<Self, GeoError>
    where
        G: AstarGraph<V> + ?Sized,
    {
        Self::with_queue(graph, start, goal, config, IndexedHeap::new())
    }

    /// Find the shortest path from `start` to `goal` using `frontier` as the
    /// priority queue. `frontier` should be empty.
    pub fn with_queue<G, Q>(
        graph: &G,
        start: V,
        goal: V,
        config: &SolverConfig,
        mut frontier: Q,
    ) -> Result<Self, GeoError>
    where
        G: AstarGraph<V> + ?Sized,
        Q: MinPriorityQueue<V>,
    {
        let timer = Instant::now();

        if !graph.contains_vertex(&start) {
            return Err(GeoError::UnknownStart);
        }
        if !graph.contains_vertex(&goal) {
            return Err(GeoError::UnknownGoal);
        }

        let mut dist_to: HashMap<V, f64> = HashMap::new();
        let mut came_from: HashMap<V, V> = HashMap::new();

        dist_to.insert(start.clone(), 0.0);
        // The start is its own predecessor; path reconstruction stops there.
        came_from.insert(start.clone(), start.clone());
        frontier.insert(start.clone(), graph.estimated_distance_to_goal(&start, &goal));

        let mut explored = 0usize;
        let mut edges = Vec::new();

        let outcome = loop {
            match frontier.peek() {
                None => break SolverOutcome::Unsolvable,
                Some(v) if *v == goal => break SolverOutcome::Solved,
                Some(_) => {}
            }
            if timer.elapsed() >= config.timeout {
                break SolverOutcome::Timeout;
            }

            let Some(p) = frontier.poll() else {
                break SolverOutcome::Unsolvable;
            };
            explored += 1;
            if timer.elapsed() >= config.timeout {
                break SolverOutcome::Timeout;
            }

            let Some(&dist_p) = dist_to.get(&p) else {
                continue;
            };
            log::trace!("astar: expanding state #{explored} at distance {dist_p}");

            edges.clear();
            graph.neighbors(&p, &mut edges);
            for edge in edges.drain(..) {
                let (_, q, weight) = edge.into_parts();
                let candidate = dist_p + weight;
                let best = dist_to.get(&q).copied().unwrap_or(f64::INFINITY);
                if candidate >= best {
                    continue;
                }

                let priority = candidate + graph.estimated_distance_to_goal(&q, &goal);
                dist_to.insert(q.clone(), candidate);
                came_from.insert(q.clone(), p.clone());
                if frontier.contains(&q) {
                    frontier.change_priority(&q, priority);
                } else {
                    frontier.insert(q, priority);
                }
            }
        };

        let (solution, solution_weight) = match outcome {
            SolverOutcome::Solved => {
                let weight = dist_to.get(&goal).copied().unwrap_or(0.0);
                (reconstruct_path(&came_from, &start, goal), weight)
            }
            SolverOutcome::Timeout | SolverOutcome::Unsolvable => (Vec::new(), 0.0),
        };
        let elapsed = timer.elapsed();

        match outcome {
            SolverOutcome::Timeout => log::warn!(
                "astar: timed out after exploring {explored} states in {elapsed:?}"
            ),
            _ => log::debug!(
                "astar: {outcome} after exploring {explored} states in {elapsed:?} (path of {} vertices, weight {solution_weight})",
                solution.len()
            ),
        }

        Ok(Self {
            outcome,
            solution,
            solution_weight,
            num_states_explored: explored,
            elapsed,
        })
    }

    /// Wall-clock time spent solving.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Consume the solver, returning the path.
    pub fn into_solution(self) -> Vec<V> {
        self.solution
    }
}

/// Walk `came_from` back from `goal` until the self-looped start, then
/// reverse. The start appears exactly once, at the front.
fn reconstruct_path<V: Eq + Hash + Clone>(came_from: &HashMap<V, V>, start: &V, goal: V) -> Vec<V> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != *start {
        let Some(prev) = came_from.get(&current) else {
            break;
        };
        let prev = prev.clone();
        path.push(std::mem::replace(&mut current, prev));
    }
    path.push(current);
    path.reverse();
    path
}

impl<V> ShortestPathsSolver<V> for AStarSolver<V> {
    #[inline]
    fn outcome(&self) -> SolverOutcome {
        self.outcome
    }

    #[inline]
    fn solution(&self) -> &[V] {
        &self.solution
    }

    #[inline]
    fn solution_weight(&self) -> f64 {
        self.solution_weight
    }

    #[inline]
    fn num_states_explored(&self) -> usize {
        self.num_states_explored
    }

    #[inline]
    fn exploration_time(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let json = serde_json::to_string(&SolverOutcome::Timeout).unwrap();
        let back: SolverOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SolverOutcome::Timeout);
    }
}
