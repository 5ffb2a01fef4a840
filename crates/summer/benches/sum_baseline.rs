use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng as _;
use std::hint::black_box;
use std::sync::Arc;
use summer::ParallelSummer;

fn build_input(length: usize) -> Arc<[i64]> {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| rng.random_range(0..100))
        .collect::<Vec<i64>>()
        .into()
}

fn bench_sum(criterion: &mut Criterion) {
    let array = build_input(1_000_000);

    criterion.bench_function("sequential_sum_1m", |bencher| {
        bencher.iter(|| {
            let total: i64 = black_box(&array).iter().sum();
            black_box(total);
        })
    });

    let summer = ParallelSummer::new(8).unwrap();
    criterion.bench_function("parallel_sum_1m_8_workers", |bencher| {
        bencher.iter(|| {
            let report = summer.run(black_box(&array)).unwrap();
            black_box(report.total);
        })
    });
}

criterion_group!(sum_benches, bench_sum);
criterion_main!(sum_benches);
