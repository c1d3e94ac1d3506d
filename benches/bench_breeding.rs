use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transit_ga::{
    evolution::{EvolutionOptions, GeneticOperator},
    layout::Layout,
    population::PopulationStore,
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, CarryOverStrategy},
};

fn history(count: u32) -> PopulationStore {
    let mut store = PopulationStore::default();
    for id in 0..count {
        let layout = Layout::from_ids(&[&[id, id + 1, id + 2], &[id + 3, id + 4], &[id + 5]]);
        store.record(layout.key(), f64::from(id % 97));
    }
    store
}

fn bench_carry_over(c: &mut Criterion) {
    let strategy = CarryOverStrategy;
    let mut rng = RandomNumberGenerator::from_seed(3);
    let parents: Vec<Layout> = (0..5)
        .map(|id| Layout::from_ids(&[&[id, id + 10, id + 20], &[id + 30, id + 40]]))
        .collect();

    let mut group = c.benchmark_group("carry_over_breeding");
    for size in [10, 100, 1000].iter() {
        let options = EvolutionOptions::new(2, *size, 1_000);
        group.bench_function(&format!("carry_over_breeding_{}", size), |b| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&parents),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_next_generation(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(5);
    let options = EvolutionOptions::new(3, 20, 1_000);
    let operator = GeneticOperator::from_options(&options).unwrap();

    let mut group = c.benchmark_group("next_generation");
    for size in [100, 1000, 10000].iter() {
        let store = history(*size);
        group.bench_function(&format!("history_{}", size), |b| {
            b.iter(|| {
                let result = operator.next_generation(
                    black_box(&store),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_carry_over, bench_next_generation);
criterion_main!(benches);
