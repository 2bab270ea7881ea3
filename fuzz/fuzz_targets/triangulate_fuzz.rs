#![no_main]
use libfuzzer_sys::fuzz_target;

use room_delaunay::Triangulator;

mod fuzz_shared;
use fuzz_shared::FuzzRoom;

fuzz_target!(|input: (i32, Vec<FuzzRoom>)| {
    let (bounds_hint, rooms) = input;

    let mut triangulator: Triangulator = Triangulator::new();
    // Invalid input must be rejected, never panic.
    if triangulator.try_triangulate(bounds_hint, &rooms).is_err() {
        return;
    }

    triangulator.sanity_check();
    let tree = triangulator.minimum_spanning_tree();
    assert!(tree.len() < rooms.len().max(1));
});
