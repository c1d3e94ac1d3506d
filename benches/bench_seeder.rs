use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transit_ga::{
    network::{ShapeCategory, Station, StationSet},
    rng::RandomNumberGenerator,
    seeder::PathSeeder,
};

fn grid(size: u32) -> StationSet {
    StationSet::new(
        (0..size)
            .map(|id| {
                Station::new(
                    id,
                    ShapeCategory::ALL[(id % 4) as usize],
                    f64::from((id * 37) % 997),
                    f64::from((id * 61) % 991),
                )
            })
            .collect(),
    )
    .unwrap()
}

fn bench_seeder(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(11);

    let mut group = c.benchmark_group("path_seeder");
    for size in [20u32, 100, 500].iter() {
        let stations = grid(*size);
        let seeder = PathSeeder::new(&stations, 5);
        group.bench_function(&format!("generate_{}", size), |b| {
            b.iter(|| {
                let layout = seeder.generate(black_box(&mut rng));
                assert_eq!(layout.num_lines(), 5);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_seeder);
criterion_main!(benches);
