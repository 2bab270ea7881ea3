use anyhow::{ensure, Result};
use room_delaunay::{
    BisectorKernel, Edge, HasPosition, InsertionError, Point2, Triangulator,
    SUPER_TRIANGLE_VERTICES,
};

#[derive(Debug, Clone, Copy)]
struct Room {
    position: Point2,
    width: i32,
    height: i32,
}

impl Room {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Room {
            position: Point2::new(x, y),
            width,
            height,
        }
    }
}

impl HasPosition for Room {
    fn position(&self) -> Point2 {
        Point2::new(
            self.position.x + self.width / 2,
            self.position.y + self.height / 2,
        )
    }
}

fn dungeon() -> Vec<Room> {
    vec![
        Room::new(10, 10, 30, 20),
        Room::new(200, 40, 40, 40),
        Room::new(90, 150, 20, 30),
        Room::new(300, 260, 50, 30),
        Room::new(40, 320, 30, 30),
        Room::new(180, 380, 40, 20),
    ]
}

fn sorted_triangles<K>(triangulator: &Triangulator<K>) -> Vec<[usize; 3]> {
    let mut result: Vec<_> = triangulator
        .triangles()
        .iter()
        .map(|triangle| triangle.sorted_vertices())
        .collect();
    result.sort_unstable();
    result
}

#[test]
fn test_rooms_are_connected_by_corridors() -> Result<()> {
    let rooms = dungeon();
    let mut triangulator: Triangulator = Triangulator::new();
    triangulator.try_triangulate(500, &rooms)?;
    triangulator.sanity_check();

    assert_eq!(
        sorted_triangles(&triangulator),
        vec![[3, 4, 5], [3, 5, 7], [4, 5, 6], [5, 6, 8], [5, 7, 8]]
    );
    assert_eq!(triangulator.edges().len(), 10);

    for room in SUPER_TRIANGLE_VERTICES..triangulator.num_vertices() {
        assert!(
            triangulator
                .triangles()
                .iter()
                .any(|triangle| triangle.contains_vertex(room)),
            "room {} has no triangle",
            room
        );
    }

    let corridors = triangulator.minimum_spanning_tree();
    ensure!(
        corridors.len() == rooms.len() - 1,
        "expected {} corridors, got {:?}",
        rooms.len() - 1,
        corridors
    );
    assert_eq!(
        corridors,
        vec![
            Edge::new(7, 8),
            Edge::new(4, 5),
            Edge::new(3, 5),
            Edge::new(6, 8),
            Edge::new(5, 7),
        ]
    );

    for corridor in &corridors {
        let [from, to] = corridor.vertices();
        let from_room = rooms[from - SUPER_TRIANGLE_VERTICES];
        let to_room = rooms[to - SUPER_TRIANGLE_VERTICES];
        assert_eq!(triangulator.vertex(from), from_room.position());
        assert_eq!(triangulator.vertex(to), to_room.position());
    }
    Ok(())
}

#[test]
fn test_bisector_kernel_misses_a_triangle() {
    let mut triangulator = Triangulator::<BisectorKernel>::new();
    triangulator.triangulate(500, dungeon());

    assert_eq!(
        sorted_triangles(&triangulator),
        vec![[3, 4, 5], [4, 5, 6], [5, 6, 8], [5, 7, 8]]
    );
}

#[test]
fn test_rejects_rooms_outside_of_bounds() {
    let mut rooms = dungeon();
    rooms.push(Room::new(-600, 10, 10, 10));

    let mut triangulator: Triangulator = Triangulator::new();
    let error = triangulator
        .try_triangulate(500, &rooms)
        .expect_err("room outside of the super triangle");
    assert_eq!(error, InsertionError::OutsideSuperTriangle);

    let error = anyhow::Error::from(error);
    assert!(!error.to_string().is_empty());
    assert!(triangulator.triangles().is_empty());
}
