use std::marker::PhantomData;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::kernels::{DelaunayKernel, ExactKernel};
use crate::math::{self, InsertionError};
use crate::primitives::SUPER_TRIANGLE_VERTICES;
use crate::spanning_tree;
use crate::{Edge, HasPosition, Point2, Triangle};

/// Cavities of well distributed points rarely have more than a handful of boundary vertices.
const CAVITY_SMALLVEC_CAPACITY: usize = 16;

/// An incremental [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
/// of integer points, built with the
/// [Bowyer-Watson algorithm](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm).
///
/// The triangulator is intended to connect room centers of a generated dungeon. Its output is
/// usually reduced to a [minimum spanning tree](Triangulator::minimum_spanning_tree) that
/// decides which rooms get connected by corridors.
///
/// # Basic usage
/// ```
/// use room_delaunay::{Point2, Triangle, Triangulator};
///
/// let mut triangulator: Triangulator = Triangulator::new();
///
/// let rooms = [Point2::new(100, 100), Point2::new(300, 100), Point2::new(200, 300)];
/// let triangles = triangulator.triangulate(500, rooms);
///
/// assert_eq!(triangles.len(), 1);
/// // Input points start at index 3, the first three vertices form the super triangle.
/// assert_eq!(triangles[0].sorted_vertices(), [3, 4, 5]);
/// assert_eq!(triangulator.vertex(4), Point2::new(300, 100));
/// ```
///
/// # Algorithm
/// A run starts by seeding a *super triangle* with the corners `(0, 0)`, `(-hint, 5 * hint)`
/// and `(5 * hint, -hint)` where `hint` is the caller supplied bounds hint. Points with
/// coordinates in `1..=hint` are always contained.
///
/// Each point is then inserted on its own:
///  1. All triangles whose circumcircle contains the point are removed.
///  2. The vertices of the removed triangles form the boundary of a cavity. They are sorted by
///     their angle around the new point.
///  3. The cavity is filled with a fan of triangles connecting consecutive boundary vertices
///     with the new point.
///
/// Finally, all triangles touching one of the super triangle's vertices are removed.
///
/// # Indices
/// Vertices are never removed: the super triangle occupies indices `0`, `1` and `2` and the
/// `n`-th inserted point gets index `n + 3`. Always resolve triangle indices with
/// [vertices](Triangulator::vertices) of the same triangulator.
///
/// # Kernels
/// The kernel type parameter decides how circumcircle containment is computed, refer to
/// [DelaunayKernel] for more information. [ExactKernel] is used by default.
///
/// # Limitations
/// The super triangle has a fixed size relative to the bounds hint. Triangles on the convex
/// hull whose circumcircle contains a super triangle corner are removed together with the
/// super triangle. Flat hull sections may therefore lose triangles.
///
/// Duplicate points and points outside of the super triangle are not detected by
/// [triangulate](Triangulator::triangulate). Use
/// [try_triangulate](Triangulator::try_triangulate) if the input is not trusted.
#[derive(Debug, Clone)]
pub struct Triangulator<K = ExactKernel> {
    vertices: Vec<Point2>,
    triangles: Vec<Triangle>,
    is_finished: bool,
    kernel: PhantomData<K>,
}

impl<K> Default for Triangulator<K> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            is_finished: false,
            kernel: PhantomData,
        }
    }
}

impl<K: DelaunayKernel> Triangulator<K> {
    /// Creates a new, empty triangulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulates a sequence of points.
    ///
    /// Any previous result is discarded. Points are inserted in iteration order, the returned
    /// triangles reference the vertices returned by [vertices](Triangulator::vertices).
    ///
    /// Fewer than three points, or only collinear points, result in no triangles.
    pub fn triangulate<V: HasPosition>(
        &mut self,
        bounds_hint: i32,
        points: impl IntoIterator<Item = V>,
    ) -> &[Triangle] {
        self.start_triangulation(bounds_hint);

        for point in points {
            self.add_point(point.position());
        }

        self.finish_triangulation();
        &self.triangles
    }

    /// Triangulates a sequence of points after validating them.
    ///
    /// Returns an error if
    ///  - the bounds hint is not positive or larger than [crate::MAX_BOUNDS_HINT]
    ///  - a point is not located strictly inside the super triangle (see [crate::validate_vertex])
    ///  - a point occurs more than once
    ///
    /// The triangulator is not modified if an error is returned.
    ///
    /// # Example
    /// ```
    /// use room_delaunay::{InsertionError, Point2, Triangulator};
    ///
    /// let mut triangulator: Triangulator = Triangulator::new();
    /// let rooms = [Point2::new(10, 10), Point2::new(50, 20), Point2::new(10, 10)];
    ///
    /// assert_eq!(
    ///     triangulator.try_triangulate(100, rooms),
    ///     Err(InsertionError::Duplicate)
    /// );
    /// ```
    pub fn try_triangulate<V: HasPosition>(
        &mut self,
        bounds_hint: i32,
        points: impl IntoIterator<Item = V>,
    ) -> Result<&[Triangle], InsertionError> {
        math::validate_bounds_hint(bounds_hint)?;

        let positions: Vec<Point2> = points.into_iter().map(|point| point.position()).collect();
        let mut seen = HashSet::with_capacity(positions.len());
        for position in &positions {
            math::validate_vertex(bounds_hint, *position)?;
            if !seen.insert(*position) {
                return Err(InsertionError::Duplicate);
            }
        }

        Ok(self.triangulate(bounds_hint, positions))
    }

    /// Removes all vertices and triangles.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.is_finished = false;
    }

    /// Resets the triangulator and seeds it with the super triangle of `bounds_hint`.
    ///
    /// Afterwards, the triangulator contains the three super triangle vertices and a single
    /// triangle connecting them. Continue with [add_point](Triangulator::add_point) and
    /// [finish_triangulation](Triangulator::finish_triangulation).
    pub fn start_triangulation(&mut self, bounds_hint: i32) {
        self.clear();
        self.vertices.extend(math::super_triangle(bounds_hint));
        self.triangles.push(Triangle::new(0, 1, 2));
    }

    /// Inserts a single point and returns its vertex index.
    ///
    /// Must be called between [start_triangulation](Triangulator::start_triangulation) and
    /// [finish_triangulation](Triangulator::finish_triangulation). The point should lie inside
    /// the super triangle.
    pub fn add_point(&mut self, position: Point2) -> usize {
        let new_index = self.vertices.len();
        self.vertices.push(position);

        // Boundary vertices of the cavity, deduplicated in slot order of the removed triangles.
        let mut cavity: SmallVec<[usize; CAVITY_SMALLVEC_CAPACITY]> = SmallVec::new();

        // Iterate backwards, swap_remove only moves already visited triangles.
        for index in (0..self.triangles.len()).rev() {
            let triangle = self.triangles[index];
            if !self.is_inside_circumcircle(&triangle, new_index) {
                continue;
            }

            for vertex in triangle.vertices() {
                if !cavity.contains(&vertex) {
                    cavity.push(vertex);
                }
            }
            self.triangles.swap_remove(index);
        }

        let vertices = &self.vertices;
        cavity.sort_by(|&a, &b| K::boundary_order(position, vertices[a], vertices[b]));

        let boundary_len = cavity.len();
        if boundary_len == 0 {
            tracing::debug!(
                new_index,
                ?position,
                "vertex is not contained in any circumcircle and remains unconnected"
            );
        }

        for (index, vertex) in cavity.iter().enumerate() {
            let next = cavity[(index + 1) % boundary_len];
            self.triangles.push(Triangle::new(*vertex, next, new_index));
        }

        tracing::trace!(new_index, cavity_size = boundary_len, "inserted vertex");
        new_index
    }

    /// Removes all triangles that reference one of the super triangle's vertices.
    ///
    /// The super triangle's vertices stay part of [vertices](Triangulator::vertices).
    pub fn finish_triangulation(&mut self) {
        let num_triangles_before = self.triangles.len();

        for index in (0..self.triangles.len()).rev() {
            if self.triangles[index].touches_super_triangle() {
                self.triangles.swap_remove(index);
            }
        }
        self.is_finished = true;

        tracing::debug!(
            removed = num_triangles_before - self.triangles.len(),
            remaining = self.triangles.len(),
            "removed super triangle"
        );
    }

    /// Returns `true` if `vertex` lies inside the circumcircle of `triangle`.
    ///
    /// The test is delegated to the kernel `K`.
    pub fn is_inside_circumcircle(&self, triangle: &Triangle, vertex: usize) -> bool {
        let [v0, v1, v2] = self.triangle_positions(triangle);
        K::contained_in_circumcircle(v0, v1, v2, self.vertices[vertex])
    }

    /// Returns the minimum spanning tree of this triangulation's edges.
    ///
    /// Edges are weighted by their squared euclidean length. If the triangulation is connected,
    /// the tree contains one edge less than the number of vertices referenced by triangles.
    pub fn minimum_spanning_tree(&self) -> Vec<Edge> {
        spanning_tree::minimum_spanning_tree(&self.vertices, self.edges())
    }
}

impl<K> Triangulator<K> {
    /// Returns all vertices, including the three super triangle vertices at the start.
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns all vertices that were inserted with [add_point](Triangulator::add_point).
    pub fn inserted_vertices(&self) -> &[Point2] {
        self.vertices
            .get(SUPER_TRIANGLE_VERTICES..)
            .unwrap_or_default()
    }

    /// Returns the position of a vertex.
    ///
    /// # Panics
    /// Panics if `index` is not smaller than [num_vertices](Triangulator::num_vertices).
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index]
    }

    /// Returns the current triangles.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the number of vertices, including the super triangle vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if [finish_triangulation](Triangulator::finish_triangulation) was called
    /// since the last reset.
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Returns the positions of a triangle's vertices in slot order.
    pub fn triangle_positions(&self, triangle: &Triangle) -> [Point2; 3] {
        triangle.vertices().map(|index| self.vertices[index])
    }

    /// Returns every triangle side exactly once, sorted by vertex indices.
    pub fn edges(&self) -> Vec<Edge> {
        spanning_tree::unique_edges(&self.triangles)
    }

    /// Checks the structural integrity of the triangulation and panics if it is violated.
    ///
    /// The following properties are checked:
    ///  - all triangles reference three distinct, existing vertices
    ///  - no triangle is degenerate
    ///  - every edge is adjacent to at most two triangles that lie on opposite sides of it
    ///  - every edge shared by two triangles is locally Delaunay (checked with exact predicates)
    ///  - finished triangulations do not reference the super triangle
    ///
    /// Triangulations created with [crate::BisectorKernel] are not guaranteed to pass this check.
    pub fn sanity_check(&self) {
        let mut adjacent_triangles: HashMap<Edge, SmallVec<[usize; 2]>> = HashMap::new();

        for (index, triangle) in self.triangles.iter().enumerate() {
            let [v0, v1, v2] = triangle.vertices();
            for vertex in [v0, v1, v2] {
                assert!(
                    vertex < self.vertices.len(),
                    "Triangle {:?} references missing vertex {}",
                    triangle,
                    vertex
                );
            }
            assert!(
                v0 != v1 && v1 != v2 && v2 != v0,
                "Triangle {:?} references a vertex twice",
                triangle
            );
            if self.is_finished {
                assert!(!triangle.touches_super_triangle());
            }

            let [p0, p1, p2] = self.triangle_positions(triangle);
            assert_ne!(
                math::orient2d(p0, p1, p2),
                0.0,
                "Triangle {:?} is degenerate",
                triangle
            );

            for edge in triangle.edges() {
                adjacent_triangles.entry(edge).or_default().push(index);
            }
        }

        for (edge, triangles) in &adjacent_triangles {
            assert!(
                triangles.len() <= 2,
                "Edge {:?} is shared by {} triangles",
                edge,
                triangles.len()
            );

            if let [first, second] = triangles[..] {
                let first = &self.triangles[first];
                let second = &self.triangles[second];
                let from = self.vertices[edge.from()];
                let to = self.vertices[edge.to()];
                let first_opposite = self.vertices[opposite_vertex(first, edge)];
                let second_opposite = self.vertices[opposite_vertex(second, edge)];

                assert_ne!(
                    math::is_ordered_ccw(from, to, first_opposite),
                    math::is_ordered_ccw(from, to, second_opposite),
                    "Triangles {:?} and {:?} overlap",
                    first,
                    second
                );

                let [v0, v1, v2] = self.triangle_positions(first);
                assert!(
                    !math::contained_in_circumference(v0, v1, v2, second_opposite),
                    "Edge {:?} is not locally Delaunay",
                    edge
                );
            }
        }
    }
}

fn opposite_vertex(triangle: &Triangle, edge: &Edge) -> usize {
    let [v0, v1, v2] = triangle.vertices();
    v0 + v1 + v2 - edge.from() - edge.to()
}
