use crate::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of vertices reserved for the super triangle.
///
/// Vertex indices `0`, `1` and `2` always belong to the super triangle. The first point passed
/// to a triangulation receives index `SUPER_TRIANGLE_VERTICES`.
pub const SUPER_TRIANGLE_VERTICES: usize = 3;

/// A triangle referencing three vertices by their index.
///
/// Indices refer to [Triangulator::vertices](crate::Triangulator::vertices). The slot order is
/// fixed but carries no orientation guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangle {
    /// Index of the first vertex
    pub first: usize,
    /// Index of the second vertex
    pub second: usize,
    /// Index of the third vertex
    pub third: usize,
}

impl Triangle {
    /// Creates a new triangle from three vertex indices.
    #[inline]
    pub const fn new(first: usize, second: usize, third: usize) -> Self {
        Triangle {
            first,
            second,
            third,
        }
    }

    /// Returns the vertex indices in slot order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.first, self.second, self.third]
    }

    /// Returns `true` if one of the slots references `vertex`.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.first == vertex || self.second == vertex || self.third == vertex
    }

    /// Returns `true` if any slot references one of the super triangle's vertices.
    #[inline]
    pub fn touches_super_triangle(&self) -> bool {
        self.vertices()
            .iter()
            .any(|&index| index < SUPER_TRIANGLE_VERTICES)
    }

    /// Returns the three sides of this triangle.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.first, self.second),
            Edge::new(self.second, self.third),
            Edge::new(self.third, self.first),
        ]
    }

    /// Returns the three vertex indices in ascending order.
    ///
    /// Two triangles describe the same face if and only if their sorted vertices are equal.
    pub fn sorted_vertices(&self) -> [usize; 3] {
        let mut vertices = self.vertices();
        vertices.sort_unstable();
        vertices
    }
}

/// An undirected edge between two vertices.
///
/// Edges are normalized on creation: `from` is always the smaller index. Consequently, two edges
/// compare equal if they connect the same two vertices, regardless of the order in which those
/// were given.
///
/// ```
/// use room_delaunay::Edge;
///
/// assert_eq!(Edge::new(4, 7), Edge::new(7, 4));
/// assert_eq!(Edge::new(7, 4).from(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Edge {
    from: usize,
    to: usize,
}

impl Edge {
    /// Creates a new edge connecting two vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Edge { from: a, to: b }
        } else {
            Edge { from: b, to: a }
        }
    }

    /// The smaller vertex index of this edge.
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// The larger vertex index of this edge.
    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns both vertex indices.
    #[inline]
    pub fn vertices(&self) -> [usize; 2] {
        [self.from, self.to]
    }

    /// Returns the squared length of this edge.
    ///
    /// `vertices` must be the vertex list the edge's indices refer to.
    pub fn length_2(&self, vertices: &[Point2]) -> i128 {
        vertices[self.from].distance_2(vertices[self.to])
    }
}
