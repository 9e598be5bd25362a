//! Core OrderBook implementation: one buy side, one sell side, and the
//! order-location index used for constant-time cancels and modifies.

use super::order::{OrderId, OrderIdGenerator, OrderRecord, Side};
use super::side::BookSide;
use super::snapshot::{OrderBookSnapshot, PriceLevelSnapshot};
use crate::utils::current_time_millis;
use std::collections::HashMap;
use tracing::trace;

/// A continuous limit order book for a single instrument.
///
/// The book owns exactly one [`BookSide`] per side and an id generator, and it
/// keeps an index from order id to resting price so cancel and modify never
/// scan the levels. All mutating operations take `&mut self`: the book is a
/// single-writer structure, and callers that need concurrent submission must
/// serialize through one exclusive section (for example a mutex around the
/// whole book).
///
/// After any public call returns, either one side is empty or the best buy
/// price is strictly below the best sell price; no crossed book is ever
/// observable from outside.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Buy side price levels (bids), best price = highest
    pub(super) bids: BookSide,

    /// Sell side price levels (asks), best price = lowest
    pub(super) asks: BookSide,

    /// Index from order id to the price the order rests at. The side is not
    /// stored: it lives in the id's low bit. Maintained on every insert,
    /// removal, fill and requeue.
    pub(super) order_locations: HashMap<OrderId, u64>,

    /// Generator for this book's order ids
    pub(super) id_generator: OrderIdGenerator,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            order_locations: HashMap::new(),
            id_generator: OrderIdGenerator::new(),
        }
    }

    /// Get the symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The side's book half for a given side.
    pub(super) fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Mutable access to the side's book half.
    pub(super) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the best bid price, if any.
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any.
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Get all orders resting at a specific price level, in time-priority
    /// order. Returns an empty vector if the level does not exist.
    pub fn get_orders_at_price(&self, price: u64, side: Side) -> Vec<OrderRecord> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol, price, side
        );
        match self.side(side).level(price) {
            Some(queue) => queue.orders(),
            None => Vec::new(),
        }
    }

    /// Get all orders resting in the book, bids first, levels best-first.
    pub fn get_all_orders(&self) -> Vec<OrderRecord> {
        trace!("Order book {}: Getting all orders", self.symbol);
        let mut result = Vec::new();

        for (_, queue) in self.bids.iter_levels() {
            result.extend(queue.orders());
        }
        for (_, queue) in self.asks.iter_levels() {
            result.extend(queue.orders());
        }

        result
    }

    /// Get a resting order by id, or `None` if the id is not in the book.
    pub fn get_order(&self, order_id: OrderId) -> Option<&OrderRecord> {
        let price = *self.order_locations.get(&order_id)?;
        self.side(order_id.side())
            .level(price)?
            .iter()
            .find(|order| order.id() == order_id)
    }

    /// Total number of orders resting in the book.
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Get the total resting quantity at each price level, bids then asks.
    pub fn get_volume_by_price(&self) -> (HashMap<u64, u64>, HashMap<u64, u64>) {
        let mut bid_volumes = HashMap::new();
        let mut ask_volumes = HashMap::new();

        for (price, queue) in self.bids.iter_levels() {
            bid_volumes.insert(price, queue.total_quantity());
        }
        for (price, queue) in self.asks.iter_levels() {
            ask_volumes.insert(price, queue.total_quantity());
        }

        (bid_volumes, ask_volumes)
    }

    /// Create a snapshot of the current order book state, truncated to `depth`
    /// levels per side, best-first.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let bid_levels: Vec<PriceLevelSnapshot> = self
            .bids
            .iter_levels()
            .take(depth)
            .map(|(price, queue)| PriceLevelSnapshot {
                price,
                order_count: queue.order_count(),
                total_quantity: queue.total_quantity(),
            })
            .collect();

        let ask_levels: Vec<PriceLevelSnapshot> = self
            .asks
            .iter_levels()
            .take(depth)
            .map(|(price, queue)| PriceLevelSnapshot {
                price,
                order_count: queue.order_count(),
                total_quantity: queue.total_quantity(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: bid_levels,
            asks: ask_levels,
        }
    }
}
