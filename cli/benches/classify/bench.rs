use std::iter;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use knn_vote::{classify, euclidean, Dataset, Execution, LabeledPoint};

const DIMENSIONS: usize = 16;

fn random_point(rng: &mut impl Rng) -> Vec<f64> {
    iter::repeat_with(|| rng.gen_range(-1.0..1.0))
        .take(DIMENSIONS)
        .collect()
}

fn random_dataset(rng: &mut impl Rng, size: usize) -> Dataset<u8> {
    iter::repeat_with(|| LabeledPoint::new(random_point(rng), rng.gen_range(0..4)))
        .take(size)
        .collect()
}

pub fn distance_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("distance");

    group.bench_function("euclidean", |b| {
        b.iter_batched(
            || (random_point(&mut rng), random_point(&mut rng)),
            |(a, b)| euclidean(&a, &b),
            BatchSize::SmallInput,
        )
    });
}

pub fn classify_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let dataset = random_dataset(&mut rng, 100_000);
    let mut group = c.benchmark_group("classify");
    group.sample_size(20);

    for (name, execution) in [
        ("sequential", Execution::Sequential),
        ("parallel", Execution::Parallel),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || random_point(&mut rng),
                |query| classify(10, &dataset, &query, execution),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, distance_benchmark, classify_benchmark);
criterion_main!(benches);
