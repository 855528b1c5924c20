#![deny(missing_docs)]
#![doc = "Edge crossing analysis for planar drawings of qubit connectivity graphs."]

mod geometry;
mod intersect;

pub use geometry::{ccw, segments_intersect, Point};
pub use intersect::{edges, intersecting_edges, Edge, EdgePair};
