use spade::Triangulation;

type SpadePoint = spade::Point2<f64>;

#[derive(Default)]
pub struct SpadeCrateWithHintGenerator<HintGeneratorType> {
    vertices: Vec<SpadePoint>,
    _hint_generator_type: std::marker::PhantomData<HintGeneratorType>,
}

pub type SpadeCrate = SpadeCrateWithHintGenerator<spade::LastUsedVertexHintGenerator>;
pub type SpadeCrateWithHierarchy = SpadeCrateWithHintGenerator<spade::HierarchyHintGenerator<f64>>;

impl<HintGeneratorType> crate::DelaunayCrate for SpadeCrateWithHintGenerator<HintGeneratorType>
where
    HintGeneratorType: spade::HintGenerator<f64>,
{
    type ResultType = spade::DelaunayTriangulation<SpadePoint, (), (), (), HintGeneratorType>;

    fn init(&mut self, vertices: impl Iterator<Item = [i32; 2]>) {
        self.vertices = vertices
            .map(|vertex| SpadePoint::new(vertex[0].into(), vertex[1].into()))
            .collect()
    }

    fn run_creation(&self) -> Self::ResultType {
        let mut triangulation = Self::ResultType::new();
        for vertex in &self.vertices {
            triangulation.insert(*vertex).unwrap();
        }
        triangulation
    }
}
