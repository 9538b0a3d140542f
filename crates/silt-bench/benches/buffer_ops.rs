//! Criterion micro-benchmarks for span indexing, conversion, and list iteration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use silt_bench::Backing;
use silt_mem::{BoundedList, TypedSpan};

/// Benchmark: sum 10K elements through the checked `Index` path.
fn bench_span_index_sum_10k(c: &mut Criterion) {
    let mut backing = Backing::new(10_000, 1);
    let mut span = backing.span();
    for i in 0..span.len() {
        span[i] = i as u32;
    }

    c.bench_function("span_index_sum_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..span.len() {
                sum += u64::from(span[i]);
            }
            black_box(sum);
        });
    });
}

/// Benchmark: sum 10K elements through the slice view.
fn bench_span_slice_sum_10k(c: &mut Criterion) {
    let mut backing = Backing::new(10_000, 1);
    let mut span = backing.span();
    for (i, slot) in span.as_mut_slice().iter_mut().enumerate() {
        *slot = i as u32;
    }

    c.bench_function("span_slice_sum_10k", |b| {
        b.iter(|| {
            let sum: u64 = span.as_slice().iter().map(|&v| u64::from(v)).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: region → span → region reinterpretation round trip.
fn bench_region_round_trip(c: &mut Criterion) {
    let mut backing = Backing::new(4_096, 7);
    let region = backing.region();

    c.bench_function("region_round_trip", |b| {
        b.iter(|| {
            // SAFETY: the backing allocation is u32 and outlives the bench.
            let span = unsafe { region.typed::<u32>() };
            black_box(span.to_region());
        });
    });
}

/// Benchmark: iterate the live range of a half-occupied list.
fn bench_list_iter_live_range(c: &mut Criterion) {
    let mut backing = Backing::new(10_000, 2);
    let span = backing.span();
    let list = BoundedList::from_span(span, 5_000);

    c.bench_function("list_iter_live_range", |b| {
        b.iter(|| {
            let sum: u64 = list.iter().map(|&v| u64::from(v)).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: construct an empty span (descriptor cost only).
fn bench_span_default(c: &mut Criterion) {
    c.bench_function("span_default", |b| {
        b.iter(|| black_box(TypedSpan::<u32>::new()));
    });
}

criterion_group!(
    benches,
    bench_span_index_sum_10k,
    bench_span_slice_sum_10k,
    bench_region_round_trip,
    bench_list_iter_live_range,
    bench_span_default,
);
criterion_main!(benches);
