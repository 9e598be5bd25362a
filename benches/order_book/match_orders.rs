use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{OrderBook, Side};
use std::hint::black_box;

/// Register all benchmarks for the crossing loop
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // One aggressive order sweeping a ladder of resting asks
    group.bench_function("sweep_ask_ladder", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..50 {
                let _ = book.add_limit_order(10_000 + i, 10, Side::Sell);
            }
            let _ = black_box(book.add_limit_order(10_049, 500, Side::Buy));
        })
    });

    // Repeated one-to-one crosses at a single price
    group.bench_function("cross_at_single_price", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for _ in 0..50 {
                let _ = book.add_limit_order(10_000, 10, Side::Buy);
                let _ = black_box(book.add_limit_order(10_000, 10, Side::Sell));
            }
        })
    });

    // Partial fills that keep re-queueing the large resting order
    group.bench_function("partial_fill_requeue", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            let _ = book.add_limit_order(10_000, 1_000, Side::Buy);
            for _ in 0..100 {
                let _ = black_box(book.add_limit_order(10_000, 5, Side::Sell));
            }
        })
    });

    // Parametrized: depth of the swept ladder
    for level_count in [10, 50, 200].iter() {
        group.bench_with_input(
            BenchmarkId::new("sweep_depth_scaling", level_count),
            level_count,
            |b, &level_count| {
                b.iter(|| {
                    let mut book = OrderBook::new("TEST-SYMBOL");
                    for i in 0..level_count {
                        let _ = book.add_limit_order(10_000 + i, 10, Side::Sell);
                    }
                    let _ = black_box(book.add_limit_order(
                        10_000 + level_count,
                        10 * level_count,
                        Side::Buy,
                    ));
                })
            },
        );
    }

    group.finish();
}
