//! In-memory street map built on the *geonav* cores.
//!
//! [`StreetMap`] holds nodes, ways and place names and serves as the graph
//! view for the A* solver. [`Router`] freezes a map together with a k-d tree
//! over its routable nodes, so arbitrary `(lon, lat)` coordinates can be
//! snapped to graph vertices and routed between.

mod distance;
mod names;
mod router;
mod street_map;

pub use distance::{EARTH_RADIUS_M, great_circle};
pub use names::{Location, clean_string};
pub use router::Router;
pub use street_map::StreetMap;
