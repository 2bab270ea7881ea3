use room_delaunay::{DelaunayKernel, Point2, Triangle, Triangulator};

/// Runs [Triangulator] with a bounds hint that contains all benchmarked vertices.
pub struct RoomDelaunayCrate<K> {
    bounds_hint: i32,
    vertices: Vec<Point2>,
    _kernel: std::marker::PhantomData<K>,
}

pub type ExactRoomDelaunayCrate = RoomDelaunayCrate<room_delaunay::ExactKernel>;
pub type BisectorRoomDelaunayCrate = RoomDelaunayCrate<room_delaunay::BisectorKernel>;

impl<K> Default for RoomDelaunayCrate<K> {
    fn default() -> Self {
        Self {
            bounds_hint: 1,
            vertices: Vec::new(),
            _kernel: std::marker::PhantomData,
        }
    }
}

impl<K: DelaunayKernel> crate::DelaunayCrate for RoomDelaunayCrate<K> {
    type ResultType = Vec<Triangle>;

    fn init(&mut self, vertices: impl Iterator<Item = [i32; 2]>) {
        self.vertices = vertices.map(Point2::from).collect();
        self.bounds_hint = self
            .vertices
            .iter()
            .map(|vertex| vertex.x.max(vertex.y))
            .max()
            .unwrap_or(1)
            .max(1);
    }

    fn run_creation(&self) -> Self::ResultType {
        Triangulator::<K>::new()
            .triangulate(self.bounds_hint, &self.vertices)
            .to_vec()
    }
}
