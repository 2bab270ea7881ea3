pub mod delaunator_crate;
pub mod room_delaunay_crate;
pub mod spade_crate;

/// Abstraction over different crates with Delaunay triangulations
pub trait DelaunayCrate: Default {
    type ResultType;

    fn init(&mut self, vertices: impl Iterator<Item = [i32; 2]>);
    fn run_creation(&self) -> Self::ResultType;
}
