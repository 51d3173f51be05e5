//! 2-d tree stored in an arena.
//!
//! Nodes live in a `Vec` and refer to their children by index; the root is
//! slot 0. The splitting axis alternates with depth, starting with `x` at the
//! root. Points comparing strictly less than a node on its axis go left,
//! everything else goes right. A point equal to one already stored is not
//! inserted again.
//!
//! Insertion order fixes the tree shape. There is no rebalancing, so sorted
//! input degrades to a chain; insertion and queries are iterative to keep
//! that case off the call stack.

use geonav_core::{GeoError, Point};

use crate::PointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    #[inline]
    fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

#[derive(Debug, Clone)]
struct KdNode {
    point: Point,
    axis: Axis,
    left: Option<usize>,
    right: Option<usize>,
}

/// Immutable nearest-neighbor index over a set of points.
#[derive(Debug, Clone)]
pub struct KdTree {
    nodes: Vec<KdNode>,
}

impl KdTree {
    /// Build the tree by inserting `points` in order. Fails if there are
    /// none or if any coordinate is NaN or infinite.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Result<Self, GeoError> {
        let mut tree = Self { nodes: Vec::new() };
        for p in points {
            if !p.is_finite() {
                return Err(GeoError::NonFiniteCoordinate);
            }
            tree.insert(p);
        }
        if tree.nodes.is_empty() {
            return Err(GeoError::EmptyPointSet);
        }
        log::debug!(
            "kdtree: indexed {} distinct points, depth {}",
            tree.len(),
            tree.depth()
        );
        Ok(tree)
    }

    fn insert(&mut self, p: Point) {
        if self.nodes.is_empty() {
            self.nodes.push(KdNode {
                point: p,
                axis: Axis::X,
                left: None,
                right: None,
            });
            return;
        }

        let mut i = 0;
        loop {
            let node = &self.nodes[i];
            if node.point == p {
                return;
            }
            let go_left = node.axis.coord(p) < node.axis.coord(node.point);
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(c) => i = c,
                None => {
                    let axis = node.axis.next();
                    let idx = self.nodes.len();
                    self.nodes.push(KdNode {
                        point: p,
                        axis,
                        left: None,
                        right: None,
                    });
                    let parent = &mut self.nodes[i];
                    if go_left {
                        parent.left = Some(idx);
                    } else {
                        parent.right = Some(idx);
                    }
                    return;
                }
            }
        }
    }

    /// Number of distinct points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stored points in insertion order, duplicates dropped.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((i, d)) = stack.pop() {
            deepest = deepest.max(d);
            let node = &self.nodes[i];
            stack.extend(node.left.map(|c| (c, d + 1)));
            stack.extend(node.right.map(|c| (c, d + 1)));
        }
        deepest
    }
}

impl PointSet for KdTree {
    /// Branch-and-bound search: the side of each split that holds the query
    /// is searched first, and the other side is skipped when the splitting
    /// line is no closer than the best point found so far.
    fn nearest(&self, x: f64, y: f64) -> Point {
        let target = Point::new(x, y);
        let mut best = self.nodes[0].point;
        let mut best_d = best.distance_squared(target);

        // (node, lower bound on the squared distance from target to its region)
        let mut stack: Vec<(usize, f64)> = vec![(0, 0.0)];
        while let Some((i, bound)) = stack.pop() {
            if bound >= best_d {
                continue;
            }
            let node = &self.nodes[i];
            let d = node.point.distance_squared(target);
            if d < best_d {
                best = node.point;
                best_d = d;
            }

            let diff = node.axis.coord(target) - node.axis.coord(node.point);
            let (good, bad) = if diff < 0.0 {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            // Pushed first so the good side pops first.
            if let Some(b) = bad {
                stack.push((b, bound.max(diff * diff)));
            }
            if let Some(g) = good {
                stack.push((g, bound));
            }
        }
        best
    }
}
