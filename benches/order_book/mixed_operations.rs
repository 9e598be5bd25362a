use super::{Lcg, shuffle};
use criterion::Criterion;
use matchbook_rs::{OrderBook, Side};
use std::hint::black_box;

/// Register the mixed add/modify/cancel workload: add a batch of random
/// orders, modify every id in shuffled order, then cancel them all in a fresh
/// shuffled order.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("add_modify_cancel_cycle", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            let mut rng = Lcg::new(0x5EED);
            let mut ids = Vec::with_capacity(200);

            for _ in 0..200 {
                let price = 9_975 + rng.below(51);
                let quantity = 10 + rng.below(10);
                let side = if rng.below(2) == 0 { Side::Buy } else { Side::Sell };
                if let Ok(id) = book.add_limit_order(price, quantity, side) {
                    ids.push(id);
                }
            }

            // Some ids were consumed by matching; not-found results are part
            // of the measured workload.
            shuffle(&mut ids, &mut rng);
            for id in &ids {
                let _ = black_box(book.modify_order(*id, 10 + rng.below(10)));
            }

            shuffle(&mut ids, &mut rng);
            for id in &ids {
                let _ = black_box(book.cancel_order(*id));
            }
        })
    });

    group.finish();
}
