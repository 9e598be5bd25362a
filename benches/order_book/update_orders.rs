use super::{Lcg, shuffle};
use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{OrderBook, OrderId, Side};
use std::hint::black_box;

/// Register all benchmarks for cancelling and modifying orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Update Orders");

    // Benchmark cancelling orders in shuffled id order
    group.bench_function("cancel_orders", |b| {
        b.iter(|| {
            let (mut book, mut ids) = setup_order_book_with_orders(100);
            let mut rng = Lcg::new(7);
            shuffle(&mut ids, &mut rng);

            for id in ids {
                let _ = black_box(book.cancel_order(id));
            }
        })
    });

    // Benchmark modifying order quantities in shuffled id order
    group.bench_function("modify_quantities", |b| {
        b.iter(|| {
            let (mut book, mut ids) = setup_order_book_with_orders(100);
            let mut rng = Lcg::new(7);
            shuffle(&mut ids, &mut rng);

            for id in ids {
                let new_quantity = 10 + rng.below(10);
                let _ = black_box(book.modify_order(id, new_quantity));
            }
        })
    });

    // Parametrized benchmark with different order counts for cancellation
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("cancel_order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let (mut book, ids) = setup_order_book_with_orders(order_count);

                    // Cancel 25% of orders
                    for id in ids.iter().take(order_count as usize / 4) {
                        let _ = black_box(book.cancel_order(*id));
                    }
                })
            },
        );
    }

    group.finish();
}

// Helper to set up a non-crossing book and collect its order ids
fn setup_order_book_with_orders(order_count: u64) -> (OrderBook, Vec<OrderId>) {
    let mut book = OrderBook::new("TEST-SYMBOL");
    let mut ids = Vec::with_capacity(order_count as usize);
    let mut rng = Lcg::new(42);

    for i in 0..order_count {
        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
        let price = match side {
            Side::Buy => 9_000 + rng.below(500),
            Side::Sell => 11_000 + rng.below(500),
        };
        let id = book
            .add_limit_order(price, 10 + rng.below(10), side)
            .expect("valid order");
        ids.push(id);
    }

    (book, ids)
}
