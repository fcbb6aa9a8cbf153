#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod cluster;
pub mod cover;
mod edges;
mod geom;
mod hull;
mod points;
mod segment_tree;
mod sweep;
mod visibility;

#[cfg(feature = "generators")]
pub mod generators;

pub use edges::{Edge, EdgeSet};
pub use geom::{on_segment, orientation, squared_distance, Orientation, Point};
pub use hull::Hull;
pub use points::{PointId, Points};
pub use sweep::{Sweeper, VisibilityGraph};
pub use visibility::visible;

/// Build the visibility graph of a point cloud.
///
/// The input may come in any order; points are sorted by `(x, y)` and
/// numbered `1..=n` before the sweep starts, and the returned graph's
/// edges refer to those ids. Degenerate inputs are handled structurally:
/// two points yield their single connecting edge, fewer yield nothing.
pub fn visibility_graph<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> VisibilityGraph {
    Sweeper::new(Points::sorted(points)).run()
}
