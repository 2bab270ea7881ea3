//! # room_delaunay
//! Connects the rooms of a generated dungeon with a
//! [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation).
//!
//! Room centers are inserted one by one into a [Triangulator] which implements the
//! Bowyer-Watson algorithm on integer coordinates. The resulting triangles are usually reduced
//! to a [minimum spanning tree](Triangulator::minimum_spanning_tree) that decides which rooms
//! are connected by corridors.
//!
//! # Features
//! * Incremental Bowyer-Watson insertion around a super triangle
//! * Two geometry kernels: an approximate, bisector based one ([BisectorKernel]) and an exact
//!   one ([ExactKernel], the default) backed by adaptive precision predicates
//! * Optional input validation with [Triangulator::try_triangulate]
//! * Edge extraction and Kruskal minimum spanning trees
//! * `serde` support for points, triangles and edges, enabled with the `serde` feature
//!
//! # Example
//! ```
//! use room_delaunay::{Point2, Triangulator};
//!
//! let rooms = [
//!     Point2::new(100, 100),
//!     Point2::new(400, 120),
//!     Point2::new(380, 300),
//!     Point2::new(120, 280),
//! ];
//!
//! let mut triangulator: Triangulator = Triangulator::new();
//! let triangles = triangulator.triangulate(500, rooms);
//! assert_eq!(triangles.len(), 2);
//!
//! let corridors = triangulator.minimum_spanning_tree();
//! assert_eq!(corridors.len(), rooms.len() - 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod test_utilities;

mod kernels;
mod math;
mod point;
mod primitives;
mod spanning_tree;
mod triangulator;

pub use kernels::{BisectorKernel, DelaunayKernel, ExactKernel};
pub use math::{
    bisector_circumcenter, super_triangle, validate_bounds_hint, validate_vertex, InsertionError,
    MAX_BOUNDS_HINT,
};
pub use point::{HasPosition, Point2};
pub use primitives::{Edge, Triangle, SUPER_TRIANGLE_VERTICES};
pub use spanning_tree::{minimum_spanning_tree, unique_edges};
pub use triangulator::Triangulator;
