#![no_main]
use libfuzzer_sys::fuzz_target;

use room_delaunay::{BisectorKernel, Triangulator};

mod fuzz_shared;
use fuzz_shared::FuzzRoom;

fuzz_target!(|rooms: Vec<FuzzRoom>| {
    const BOUNDS_HINT: i32 = 1024;

    // The approximate kernel gives no structural guarantees. Check that it terminates without
    // panicking and only references inserted vertices.
    let mut triangulator = Triangulator::<BisectorKernel>::new();
    let triangles = triangulator.triangulate(BOUNDS_HINT, &rooms);
    let num_vertices = rooms.len() + room_delaunay::SUPER_TRIANGLE_VERTICES;
    for triangle in triangles {
        assert!(!triangle.touches_super_triangle());
        assert!(triangle.vertices().iter().all(|&index| index < num_vertices));
    }
});
