//! Benchmark for duplicate-run truncation.
//!
//! Compares the allocating `truncate_runs` with consuming the lazy
//! `TruncatedRuns` iterator directly.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setwise::runs::{RunTruncator, truncate_runs};
use std::hint::black_box;

/// Sorted input where every fourth value repeats `index % 5` times.
fn generate_runs(size: i64) -> Vec<i64> {
    (0..size)
        .flat_map(|index| {
            let repeat = if index % 4 == 0 { index % 5 + 1 } else { 1 };
            std::iter::repeat_n(index, usize::try_from(repeat).unwrap_or(1))
        })
        .collect()
}

fn benchmark_truncate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("truncate_runs");

    for size in [1_000, 10_000, 100_000] {
        let input = generate_runs(size);

        group.bench_with_input(BenchmarkId::new("vec", size), &input, |bencher, input| {
            bencher.iter(|| black_box(truncate_runs(black_box(input), 2)));
        });

        let truncator = RunTruncator::new(2);
        group.bench_with_input(BenchmarkId::new("lazy_sum", size), &input, |bencher, input| {
            bencher.iter(|| black_box(truncator.runs(black_box(input)).sum::<i64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_truncate);
criterion_main!(benches);
