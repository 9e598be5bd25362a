//! One side of the book: a price-ordered collection of time-priority queues.

use super::order::{OrderId, OrderRecord, Side};
use super::queue::TimePriorityQueue;
use std::collections::BTreeMap;

/// Price-ordered mapping from price to the queue of orders resting there.
///
/// The defining invariant is the iteration order: the buy side yields its
/// levels from highest price to lowest, the sell side from lowest to highest,
/// after every mutation. The first level in that order is the side's best
/// price. Levels are removed the moment their last order leaves, so an empty
/// queue is never reachable from a side.
#[derive(Debug)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<u64, TimePriorityQueue>,
}

impl BookSide {
    /// Creates an empty side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Which side of the book this is.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Appends an order to the queue at its price, creating the level if this
    /// is the first order resting there.
    pub fn insert(&mut self, order: OrderRecord) {
        debug_assert_eq!(order.side(), self.side);
        self.levels.entry(order.price()).or_default().append(order);
    }

    /// Removes the order with the given id from the queue at `price`.
    ///
    /// The level is removed as well if the order was the last one resting
    /// there. Returns `None` if no such order rests at that price.
    pub fn remove(&mut self, price: u64, order_id: OrderId) -> Option<OrderRecord> {
        let queue = self.levels.get_mut(&price)?;
        let removed = queue.remove_by_id(order_id)?;
        if queue.is_empty() {
            self.levels.remove(&price);
        }
        Some(removed)
    }

    /// Replaces the quantity of the order with the given id at `price`,
    /// re-queueing it at the tail of its level. Price never changes; the order
    /// stays in the same level. Returns `false` if the order is not there.
    pub fn modify(&mut self, price: u64, order_id: OrderId, new_quantity: u64) -> bool {
        match self.levels.get_mut(&price) {
            Some(queue) => queue.modify(order_id, new_quantity),
            None => false,
        }
    }

    /// The best price on this side: highest for buys, lowest for sells.
    pub fn best_price(&self) -> Option<u64> {
        match self.side {
            Side::Buy => self.levels.last_key_value().map(|(price, _)| *price),
            Side::Sell => self.levels.first_key_value().map(|(price, _)| *price),
        }
    }

    /// The queue at the best price.
    pub fn best_queue(&self) -> Option<&TimePriorityQueue> {
        self.best_price().and_then(|price| self.levels.get(&price))
    }

    /// Pops the longest-waiting order at `price`, if the level exists.
    pub fn pop_front_at(&mut self, price: u64) -> Option<OrderRecord> {
        self.levels.get_mut(&price)?.pop_front()
    }

    /// Re-appends a partially filled order at the tail of its own level.
    pub fn append_at(&mut self, price: u64, order: OrderRecord) {
        debug_assert_eq!(order.price(), price);
        self.levels.entry(price).or_default().append(order);
    }

    /// Removes the level at `price` if it holds no orders.
    pub fn remove_level_if_empty(&mut self, price: u64) {
        if self.levels.get(&price).is_some_and(TimePriorityQueue::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// The queue resting at `price`, if the level exists.
    pub fn level(&self, price: u64) -> Option<&TimePriorityQueue> {
        self.levels.get(&price)
    }

    /// True if no orders rest on this side.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of occupied price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of orders resting on this side.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(TimePriorityQueue::order_count).sum()
    }

    /// Iterates the levels best-first: descending prices for the buy side,
    /// ascending for the sell side.
    pub fn iter_levels(&self) -> Box<dyn Iterator<Item = (u64, &TimePriorityQueue)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev().map(|(price, queue)| (*price, queue))),
            Side::Sell => Box::new(self.levels.iter().map(|(price, queue)| (*price, queue))),
        }
    }
}
