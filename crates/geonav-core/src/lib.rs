//! **geonav-core**: shared primitives for the *geonav* route-finding toolkit.
//!
//! This crate provides the types the path solver, the spatial index and the
//! street map layer agree on: 2-D map coordinates, weighted directed edges,
//! and the common error type.

pub mod edge;
pub mod error;
pub mod geom;

pub use edge::WeightedEdge;
pub use error::GeoError;
pub use geom::Point;
