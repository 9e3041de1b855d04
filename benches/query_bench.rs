//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stabix::{Interval, IntervalTree, Span};

/// Deterministic interval set from a fixed-seed LCG, so runs compare.
fn synthetic_intervals(count: usize) -> Vec<Interval<usize>> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as u32
    };

    (0..count)
        .map(|idx| {
            let left = f64::from(next() % 100_000);
            let len = f64::from(next() % 500);
            Interval::new(left, left + len, idx).expect("synthetic interval is valid")
        })
        .collect()
}

fn benchmark_construction(c: &mut Criterion) {
    for count in [1_000usize, 10_000] {
        let intervals = synthetic_intervals(count);
        c.bench_function(&format!("construct_n={count}"), |b| {
            b.iter(|| IntervalTree::new(black_box(intervals.clone())));
        });
    }
}

fn benchmark_queries(c: &mut Criterion) {
    let tree = IntervalTree::new(synthetic_intervals(10_000));

    c.bench_function("stab_n=10000", |b| {
        let mut point = 0.0f64;
        b.iter(|| {
            point = (point + 7919.0) % 100_000.0;
            black_box(tree.find_intersecting(Span::point(point)))
        });
    });

    c.bench_function("range_n=10000", |b| {
        let mut start = 0.0f64;
        b.iter(|| {
            start = (start + 4271.0) % 100_000.0;
            black_box(tree.find_intersecting(Span::new(start, start + 250.0)))
        });
    });
}

criterion_group!(benches, benchmark_construction, benchmark_queries);
criterion_main!(benches);
