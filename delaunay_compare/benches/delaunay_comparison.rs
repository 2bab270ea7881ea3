
use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, BenchmarkId, Criterion,
    Throughput,
};
use delaunay_compare::{delaunator_crate, room_delaunay_crate, spade_crate, DelaunayCrate};

pub fn creation_benchmark(c: &mut Criterion) {
    fn run_single<Crate: DelaunayCrate>(
        group: &mut BenchmarkGroup<WallTime>,
        sizes: &[usize],
        crate_name: &'static str,
    ) {
        for size in sizes {
            group.throughput(Throughput::Elements(*size as u64));

            let name = format!("{} (local insertion)", crate_name);
            let mut delaunay_crate = Crate::default();
            delaunay_crate.init(bench_utilities::walk_i32().take(*size));
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| delaunay_crate.run_creation())
            });

            let name = format!("{} (uniform)", crate_name);
            let mut delaunay_crate = Crate::default();
            delaunay_crate.init(bench_utilities::uniform_i32().take(*size));
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| delaunay_crate.run_creation())
            });
        }
    }

    let mut group = c.benchmark_group("comparison: creation benchmark");
    // Room counts of typical dungeons. Bowyer-Watson without a point locator is quadratic.
    let sizes = [25, 50, 100, 200, 400, 800];

    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(3));

    run_single::<room_delaunay_crate::ExactRoomDelaunayCrate>(
        &mut group,
        &sizes,
        "room_delaunay exact",
    );
    run_single::<room_delaunay_crate::BisectorRoomDelaunayCrate>(
        &mut group,
        &sizes,
        "room_delaunay bisector",
    );
    run_single::<spade_crate::SpadeCrate>(&mut group, &sizes, "spade 2");
    run_single::<spade_crate::SpadeCrateWithHierarchy>(&mut group, &sizes, "spade 2 hierarchy");
    run_single::<delaunator_crate::DelaunatorCrate>(&mut group, &sizes, "delaunator");
    group.finish();
}

criterion_group!(benches, creation_benchmark);
criterion_main!(benches);
