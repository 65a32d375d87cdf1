//! Benchmarks for pipeline stages and the data-driven evaluator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stream_drills::datasets;
use stream_drills::drills::convert::new_deck;
use stream_drills::processing::{evaluate, Comparator, Pipeline, SortDirection, Stage, Terminal};

fn numbers(len: usize) -> Vec<u64> {
    // Deterministic pseudo-random values with plenty of duplicates.
    (0..len as u64).map(|i| (i.wrapping_mul(2_654_435_761)) % 1_000).collect()
}

fn bench_chained_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_stages");
    for len in [1_000usize, 10_000, 100_000] {
        let source = numbers(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("filter_distinct_sort_limit", len), &source, |b, s| {
            b.iter(|| {
                Pipeline::new(black_box(s.clone()))
                    .filter(|n| n % 3 != 0)
                    .distinct()
                    .sorted()
                    .limit(10)
                    .collect()
            })
        });
        group.bench_with_input(BenchmarkId::new("map_sum", len), &source, |b, s| {
            b.iter(|| Pipeline::new(black_box(s.clone())).map(|n| n * 2).sum::<u64>())
        });
    }
    group.finish();
}

fn bench_stable_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("stable_sort");
    let source: Vec<(u64, usize)> = numbers(50_000).into_iter().zip(0..).collect();
    let by_value = Comparator::by_key(|p: &(u64, usize)| p.0);
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        group.bench_function(format!("{direction:?}"), |b| {
            b.iter(|| Pipeline::new(black_box(source.clone())).sorted_by(&by_value, direction).count())
        });
    }
    group.finish();
}

fn bench_drills(c: &mut Criterion) {
    let mut group = c.benchmark_group("drills");
    group.bench_function("new_deck", |b| b.iter(new_deck));
    group.bench_function("low_calorie_menu_evaluate", |b| {
        let stages = vec![
            Stage::filter(|d: &stream_drills::types::Dish| d.calories < 400),
            Stage::sort(Comparator::by_key(|d: &stream_drills::types::Dish| d.calories)),
        ];
        let terminal = Terminal::join(", ");
        b.iter(|| evaluate(black_box(datasets::menu()), &stages, &terminal))
    });
    group.finish();
}

criterion_group!(benches, bench_chained_stages, bench_stable_sort, bench_drills);
criterion_main!(benches);
