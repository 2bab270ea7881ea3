//! Reduces a triangulation to the edges that connect all rooms with minimal total length.

use hashbrown::HashSet;

use crate::{Edge, Point2, Triangle};

/// Returns every side of the given triangles exactly once.
///
/// The result is sorted by vertex indices.
pub fn unique_edges(triangles: &[Triangle]) -> Vec<Edge> {
    let mut edges = HashSet::with_capacity(triangles.len() * 2);
    for triangle in triangles {
        edges.extend(triangle.edges());
    }

    let mut result: Vec<Edge> = edges.into_iter().collect();
    result.sort_unstable();
    result
}

/// Calculates a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Edges are weighted by their squared length. Ties are broken by vertex indices, the result
/// is therefore deterministic. If the edges connect `n` vertices, `n - 1` edges are returned.
/// Disconnected inputs result in a minimum spanning forest.
///
/// `vertices` must contain every vertex referenced by `edges`.
///
/// # Example
/// ```
/// use room_delaunay::{minimum_spanning_tree, Edge, Point2};
///
/// let vertices = [Point2::new(0, 0), Point2::new(10, 0), Point2::new(0, 3)];
/// let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
///
/// let tree = minimum_spanning_tree(&vertices, edges);
/// assert_eq!(tree, vec![Edge::new(0, 2), Edge::new(0, 1)]);
/// ```
pub fn minimum_spanning_tree(
    vertices: &[Point2],
    edges: impl IntoIterator<Item = Edge>,
) -> Vec<Edge> {
    let mut candidates: Vec<(i128, Edge)> = edges
        .into_iter()
        .map(|edge| (edge.length_2(vertices), edge))
        .collect();
    candidates.sort_unstable();

    let mut components = DisjointSet::new(vertices.len());
    let mut tree = Vec::new();
    for (_, edge) in candidates {
        if components.union(edge.from(), edge.to()) {
            tree.push(edge);
        }
    }
    tree
}

/// Union-find over vertex indices, with path halving and union by size.
struct DisjointSet {
    parents: Vec<usize>,
    sizes: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
        }
    }

    fn find(&mut self, mut element: usize) -> usize {
        while self.parents[element] != element {
            let grand_parent = self.parents[self.parents[element]];
            self.parents[element] = grand_parent;
            element = grand_parent;
        }
        element
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they were already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.sizes[root_a] < self.sizes[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parents[root_b] = root_a;
        self.sizes[root_a] += self.sizes[root_b];
        true
    }
}

#[cfg(test)]
mod test {
    use super::{minimum_spanning_tree, unique_edges, DisjointSet};
    use crate::test_utilities::{random_points_in_range, SEED};
    use crate::{Edge, Point2, Triangle, Triangulator};

    fn total_length(vertices: &[Point2], edges: &[Edge]) -> i128 {
        edges.iter().map(|edge| edge.length_2(vertices)).sum()
    }

    fn is_spanning_tree(num_vertices: usize, edges: &[Edge]) -> bool {
        let mut components = DisjointSet::new(num_vertices);
        edges.len() + 1 == num_vertices
            && edges
                .iter()
                .all(|edge| components.union(edge.from(), edge.to()))
    }

    #[test]
    fn test_unique_edges() {
        let triangles = [Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)];
        assert_eq!(
            unique_edges(&triangles),
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ]
        );
        assert!(unique_edges(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_set() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(3, 4));
        assert!(!set.union(1, 0));
        assert!(set.union(1, 4));
        assert!(!set.union(0, 3));
        assert_eq!(set.find(0), set.find(4));
        assert_ne!(set.find(2), set.find(4));
    }

    #[test]
    fn test_minimum_spanning_forest() {
        let vertices = [
            Point2::new(0, 0),
            Point2::new(1, 0),
            Point2::new(50, 50),
            Point2::new(52, 50),
        ];
        let tree = minimum_spanning_tree(&vertices, [Edge::new(0, 1), Edge::new(2, 3)]);
        assert_eq!(tree, vec![Edge::new(0, 1), Edge::new(2, 3)]);
        assert!(minimum_spanning_tree(&vertices, Vec::<Edge>::new()).is_empty());
    }

    #[test]
    fn test_minimum_spanning_tree_is_minimal() {
        const NUM_POINTS: usize = 7;
        let vertices = random_points_in_range(200, NUM_POINTS, SEED);

        let mut edges = Vec::new();
        for from in 0..NUM_POINTS {
            for to in from + 1..NUM_POINTS {
                edges.push(Edge::new(from, to));
            }
        }

        let tree = minimum_spanning_tree(&vertices, edges.iter().copied());
        assert!(is_spanning_tree(NUM_POINTS, &tree));

        // Brute force: check all subsets of NUM_POINTS - 1 edges
        let tree_length = total_length(&vertices, &tree);
        let num_edges = edges.len();
        let mut best = i128::MAX;
        for mask in 0u32..(1 << num_edges) {
            if mask.count_ones() as usize != NUM_POINTS - 1 {
                continue;
            }
            let subset: Vec<Edge> = (0..num_edges)
                .filter(|&bit| mask & (1 << bit) != 0)
                .map(|bit| edges[bit])
                .collect();
            if is_spanning_tree(NUM_POINTS, &subset) {
                best = best.min(total_length(&vertices, &subset));
            }
        }
        assert_eq!(tree_length, best);
    }

    #[test]
    fn test_triangulation_spanning_tree() {
        let points = random_points_in_range(1000, 100, SEED);
        let mut triangulator: Triangulator = Triangulator::new();
        triangulator.triangulate(1000, &points);

        let edges = triangulator.edges();
        let tree = triangulator.minimum_spanning_tree();
        assert!(!tree.is_empty());
        assert!(tree.iter().all(|edge| edges.contains(edge)));

        let mut components = DisjointSet::new(triangulator.num_vertices());
        assert!(tree
            .iter()
            .all(|edge| components.union(edge.from(), edge.to())));
    }
}
