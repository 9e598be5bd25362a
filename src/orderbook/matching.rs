//! Contains the crossing loop that matches resting orders after each add.

use super::book::OrderBook;
use tracing::trace;

impl OrderBook {
    /// Match crossing orders until the book is stable.
    ///
    /// While both sides are non-empty and the best bid meets or exceeds the
    /// best ask, the two longest-waiting orders at those prices trade against
    /// each other for `min` of their remaining quantities. A partially filled
    /// order goes back to the tail of its own price level; a fully filled
    /// order leaves the book and the location index. Emptied levels are
    /// removed immediately, so the loop always terminates: every iteration
    /// fully consumes at least one resting order.
    ///
    /// The loop's only side effects are quantity mutations and structural
    /// removal; no trade record is retained by the book.
    pub(super) fn match_resting_orders(&mut self) {
        loop {
            let (Some(best_bid), Some(best_ask)) = (self.bids.best_price(), self.asks.best_price())
            else {
                break;
            };
            if best_bid < best_ask {
                // The book rests: no further match is possible.
                break;
            }

            // Both pops succeed: a best price only exists for an occupied level.
            let Some(mut buy_order) = self.bids.pop_front_at(best_bid) else {
                break;
            };
            let Some(mut sell_order) = self.asks.pop_front_at(best_ask) else {
                self.bids.append_at(best_bid, buy_order);
                break;
            };

            let fill_quantity = buy_order.quantity().min(sell_order.quantity());
            buy_order.fill(fill_quantity);
            sell_order.fill(fill_quantity);
            trace!(
                "Order book {}: Matched {} against {} for {} at bid {} / ask {}",
                self.symbol,
                buy_order.id(),
                sell_order.id(),
                fill_quantity,
                best_bid,
                best_ask
            );

            // Partial fills re-queue at the tail of their own level; full
            // fills leave the book and the index.
            if buy_order.quantity() > 0 {
                self.bids.append_at(best_bid, buy_order);
            } else {
                self.order_locations.remove(&buy_order.id());
            }
            if sell_order.quantity() > 0 {
                self.asks.append_at(best_ask, sell_order);
            } else {
                self.order_locations.remove(&sell_order.id());
            }

            self.bids.remove_level_if_empty(best_bid);
            self.asks.remove_level_if_empty(best_ask);
        }
    }
}
