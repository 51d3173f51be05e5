use std::collections::HashMap;

use geonav_core::{GeoError, Point, WeightedEdge};
use geonav_paths::AstarGraph;

use crate::distance::great_circle;
use crate::names::{Location, clean_string};

#[derive(Debug, Clone)]
struct MapNode {
    pos: Point,
    name: Option<String>,
}

/// In-memory street graph keyed by node id.
///
/// Node positions are `(lon, lat)` in degrees; edge weights are great-circle
/// metres, so the great-circle heuristic never overestimates.
#[derive(Debug, Clone, Default)]
pub struct StreetMap {
    nodes: HashMap<u64, MapNode>,
    adjacency: HashMap<u64, Vec<WeightedEdge<u64>>>,
}

impl StreetMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or move an existing one.
    ///
    /// Moving a node recomputes the weight of every edge that touches it, so
    /// weights stay equal to the great-circle length between their endpoints.
    /// Fails on a NaN or infinite coordinate.
    pub fn add_node(&mut self, id: u64, lon: f64, lat: f64) -> Result<(), GeoError> {
        let pos = Point::new(lon, lat);
        if !pos.is_finite() {
            return Err(GeoError::NonFiniteCoordinate);
        }
        match self.nodes.get_mut(&id) {
            Some(node) if node.pos == pos => {}
            Some(node) => {
                node.pos = pos;
                self.reweigh_edges(id);
            }
            None => {
                self.nodes.insert(id, MapNode { pos, name: None });
            }
        }
        Ok(())
    }

    fn reweigh_edges(&mut self, id: u64) {
        let nodes = &self.nodes;
        let mut touched = 0usize;
        for edges in self.adjacency.values_mut() {
            for e in edges.iter_mut().filter(|e| *e.from() == id || *e.to() == id) {
                let (from, to) = (*e.from(), *e.to());
                if let (Some(a), Some(b)) = (nodes.get(&from), nodes.get(&to)) {
                    *e = WeightedEdge::new(from, to, great_circle(a.pos, b.pos));
                    touched += 1;
                }
            }
        }
        log::trace!("street map: moved node {id}, reweighed {touched} edges");
    }

    /// Attach a place name to a node.
    pub fn set_name(&mut self, id: u64, name: impl Into<String>) -> Result<(), GeoError> {
        let node = self.nodes.get_mut(&id).ok_or(GeoError::UnknownNode(id))?;
        node.name = Some(name.into());
        Ok(())
    }

    /// Connect consecutive nodes of `way` in both directions.
    pub fn add_way(&mut self, way: &[u64]) -> Result<(), GeoError> {
        self.connect(way, true)
    }

    /// Connect consecutive nodes of `way` in travel order only.
    pub fn add_one_way(&mut self, way: &[u64]) -> Result<(), GeoError> {
        self.connect(way, false)
    }

    fn connect(&mut self, way: &[u64], both_directions: bool) -> Result<(), GeoError> {
        let positions = way
            .iter()
            .map(|id| self.position(*id).ok_or(GeoError::UnknownNode(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        for (ids, pos) in way.windows(2).zip(positions.windows(2)) {
            let (a, b) = (ids[0], ids[1]);
            if a == b {
                continue;
            }
            let w = great_circle(pos[0], pos[1]);
            self.adjacency
                .entry(a)
                .or_default()
                .push(WeightedEdge::new(a, b, w));
            if both_directions {
                self.adjacency
                    .entry(b)
                    .or_default()
                    .push(WeightedEdge::new(b, a, w));
            }
        }
        Ok(())
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(lon, lat)` of a node.
    pub fn position(&self, id: u64) -> Option<Point> {
        self.nodes.get(&id).map(|n| n.pos)
    }

    /// Place name of a node, if any.
    pub fn name(&self, id: u64) -> Option<&str> {
        self.nodes.get(&id).and_then(|n| n.name.as_deref())
    }

    /// Edges leaving a node.
    pub fn edges(&self, id: u64) -> &[WeightedEdge<u64>] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids and positions of nodes with at least one outgoing edge.
    pub fn routable_nodes(&self) -> impl Iterator<Item = (u64, Point)> + '_ {
        self.nodes
            .iter()
            .filter(|(id, _)| !self.edges(**id).is_empty())
            .map(|(id, n)| (*id, n.pos))
    }

    /// Full names of places whose cleaned name starts with the cleaned
    /// `prefix`. Sorted, without duplicates.
    pub fn locations_by_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = clean_string(prefix);
        let mut names: Vec<String> = self
            .nodes
            .values()
            .filter_map(|n| n.name.as_deref())
            .filter(|name| clean_string(name).starts_with(&prefix))
            .map(str::to_owned)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Every place whose cleaned name equals the cleaned `name`, ordered by id.
    pub fn locations(&self, name: &str) -> Vec<Location> {
        let wanted = clean_string(name);
        let mut found: Vec<Location> = self
            .nodes
            .iter()
            .filter_map(|(id, n)| {
                let full = n.name.as_deref()?;
                (clean_string(full) == wanted).then(|| Location {
                    id: *id,
                    lon: n.pos.x,
                    lat: n.pos.y,
                    name: full.to_owned(),
                })
            })
            .collect();
        found.sort_by_key(|l| l.id);
        found
    }
}

impl AstarGraph<u64> for StreetMap {
    fn neighbors(&self, v: &u64, buf: &mut Vec<WeightedEdge<u64>>) {
        buf.extend_from_slice(self.edges(*v));
    }

    fn estimated_distance_to_goal(&self, v: &u64, goal: &u64) -> f64 {
        match (self.position(*v), self.position(*goal)) {
            (Some(a), Some(b)) => great_circle(a, b),
            _ => 0.0,
        }
    }

    fn contains_vertex(&self, v: &u64) -> bool {
        self.nodes.contains_key(v)
    }
}
