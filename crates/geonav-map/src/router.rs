use std::collections::HashMap;

use geonav_core::{GeoError, Point};
use geonav_paths::{AStarSolver, SolverConfig};
use geonav_spatial::{KdTree, PointSet};

use crate::StreetMap;

/// A [`StreetMap`] frozen together with a spatial index over its routable nodes.
///
/// Only nodes with at least one outgoing edge are indexed, so every
/// coordinate snaps to a node the solver can leave.
#[derive(Debug, Clone)]
pub struct Router {
    map: StreetMap,
    index: KdTree,
    ids: HashMap<Point, u64>,
}

impl Router {
    /// Index the routable nodes of `map`.
    ///
    /// When several nodes share a position the lowest id represents it.
    pub fn new(map: StreetMap) -> Result<Self, GeoError> {
        let mut routable: Vec<(u64, Point)> = map.routable_nodes().collect();
        routable.sort_by_key(|(id, _)| *id);

        let mut ids = HashMap::with_capacity(routable.len());
        for &(id, pos) in &routable {
            ids.entry(pos).or_insert(id);
        }

        let index = KdTree::new(routable.iter().map(|(_, pos)| *pos)).map_err(|err| match err {
            GeoError::EmptyPointSet => GeoError::NoRoutableNodes,
            other => other,
        })?;
        log::debug!(
            "router: indexed {} routable nodes out of {}",
            routable.len(),
            map.len()
        );

        Ok(Self { map, index, ids })
    }

    /// The underlying map.
    #[inline]
    pub fn map(&self) -> &StreetMap {
        &self.map
    }

    /// Id of the routable node closest to `(lon, lat)`.
    ///
    /// Fails on a NaN or infinite coordinate.
    pub fn closest(&self, lon: f64, lat: f64) -> Result<u64, GeoError> {
        if !Point::new(lon, lat).is_finite() {
            return Err(GeoError::NonFiniteCoordinate);
        }
        let p = self.index.nearest(lon, lat);
        self.ids.get(&p).copied().ok_or(GeoError::NoRoutableNodes)
    }

    /// Route between the nodes closest to the two coordinates.
    pub fn shortest_path(
        &self,
        start_lon: f64,
        start_lat: f64,
        dest_lon: f64,
        dest_lat: f64,
        config: &SolverConfig,
    ) -> Result<AStarSolver<u64>, GeoError> {
        let start = self.closest(start_lon, start_lat)?;
        let dest = self.closest(dest_lon, dest_lat)?;
        log::debug!("router: routing {start} -> {dest}");
        AStarSolver::new(&self.map, start, dest, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonav_paths::{ShortestPathsSolver, SolverOutcome};
    use std::time::Duration;

    /// A 5x5 street grid, 0.001 degrees apart, ids `10 * row + col`,
    /// plus an unconnected node right next to the origin.
    fn grid_map() -> StreetMap {
        let mut m = StreetMap::new();
        for row in 0..5u64 {
            for col in 0..5u64 {
                let (lon, lat) = (-122.26 + col as f64 * 0.001, 37.87 - row as f64 * 0.001);
                m.add_node(10 * row + col, lon, lat).unwrap();
            }
        }
        for row in 0..5u64 {
            let way: Vec<u64> = (0..5).map(|col| 10 * row + col).collect();
            m.add_way(&way).unwrap();
        }
        for col in 0..5u64 {
            let way: Vec<u64> = (0..5).map(|row| 10 * row + col).collect();
            m.add_way(&way).unwrap();
        }
        m.add_node(999, -122.2601, 37.8701).unwrap();
        m
    }

    #[test]
    fn closest_snaps_to_routable_nodes() {
        let r = Router::new(grid_map()).unwrap();
        assert_eq!(r.closest(-122.26, 37.87).unwrap(), 0);
        // Closer to 999, but 999 has no edges.
        assert_eq!(r.closest(-122.2601, 37.8701).unwrap(), 0);
        assert_eq!(r.closest(-122.2569, 37.8679).unwrap(), 23);
        assert_eq!(r.closest(-100.0, 0.0).unwrap(), 44);
    }

    #[test]
    fn routes_between_coordinates() {
        let r = Router::new(grid_map()).unwrap();
        let s = r
            .shortest_path(-122.26, 37.87, -122.256, 37.866, &SolverConfig::default())
            .unwrap();
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        let path = s.solution();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&44));
        // Eight grid steps on a Manhattan grid.
        assert_eq!(path.len(), 9);
        for w in path.windows(2) {
            assert!(r.map().edges(w[0]).iter().any(|e| *e.to() == w[1]));
        }
    }

    #[test]
    fn same_start_and_destination() {
        let r = Router::new(grid_map()).unwrap();
        let s = r
            .shortest_path(-122.258, 37.868, -122.258, 37.868, &SolverConfig::default())
            .unwrap();
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert_eq!(s.solution(), &[22]);
        assert_eq!(s.solution_weight(), 0.0);
    }

    #[test]
    fn zero_budget_times_out() {
        let r = Router::new(grid_map()).unwrap();
        let cfg = SolverConfig::new().with_timeout(Duration::ZERO);
        let s = r.shortest_path(-122.26, 37.87, -122.256, 37.866, &cfg).unwrap();
        assert_eq!(s.outcome(), SolverOutcome::Timeout);
        assert!(s.solution().is_empty());
    }

    #[test]
    fn non_finite_queries_are_rejected() {
        let r = Router::new(grid_map()).unwrap();
        assert_eq!(
            r.closest(f64::NAN, 37.87).unwrap_err(),
            GeoError::NonFiniteCoordinate
        );
        assert_eq!(
            r.closest(-122.26, f64::NEG_INFINITY).unwrap_err(),
            GeoError::NonFiniteCoordinate
        );
        assert_eq!(
            r.shortest_path(-122.26, 37.87, f64::NAN, f64::NAN, &SolverConfig::default())
                .unwrap_err(),
            GeoError::NonFiniteCoordinate
        );
    }

    #[test]
    fn map_without_edges_is_rejected() {
        let mut m = StreetMap::new();
        m.add_node(1, 0.0, 0.0).unwrap();
        assert_eq!(Router::new(m).unwrap_err(), GeoError::NoRoutableNodes);
        assert_eq!(
            Router::new(StreetMap::new()).unwrap_err(),
            GeoError::NoRoutableNodes
        );
    }

    #[test]
    fn shared_position_resolves_to_lowest_id() {
        let mut m = StreetMap::new();
        m.add_node(7, 1.0, 1.0).unwrap();
        m.add_node(3, 1.0, 1.0).unwrap();
        m.add_node(5, 2.0, 2.0).unwrap();
        m.add_way(&[7, 5, 3]).unwrap();
        let r = Router::new(m).unwrap();
        assert_eq!(r.closest(1.1, 1.1).unwrap(), 3);
    }
}
