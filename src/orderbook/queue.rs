//! Time-priority queue for a single price level.

use super::order::{OrderId, OrderRecord};
use std::collections::VecDeque;

/// FIFO queue of orders resting at one price level.
///
/// Arrival order is the only priority considered within a level: the order
/// inserted earliest and not repositioned since is served first. A quantity
/// modification repositions the order at the tail, forfeiting its time
/// priority relative to everything already resting at the level.
///
/// An empty queue must not remain reachable from a book side; the side removes
/// the level as soon as its last order leaves.
#[derive(Debug, Default)]
pub struct TimePriorityQueue {
    orders: VecDeque<OrderRecord>,
}

impl TimePriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
        }
    }

    /// Appends an order at the tail of the queue.
    pub fn append(&mut self, order: OrderRecord) {
        self.orders.push_back(order);
    }

    /// Removes and returns the order with the given id, or `None` if the id is
    /// not resting in this queue.
    pub fn remove_by_id(&mut self, order_id: OrderId) -> Option<OrderRecord> {
        let position = self.orders.iter().position(|order| order.id() == order_id)?;
        self.orders.remove(position)
    }

    /// Replaces an order's quantity and moves it to the tail of the queue.
    ///
    /// This is a single observable step: the order is never absent from the
    /// queue, and never present twice. Returns `false` if the id is not here.
    pub fn modify(&mut self, order_id: OrderId, new_quantity: u64) -> bool {
        let Some(position) = self.orders.iter().position(|order| order.id() == order_id) else {
            return false;
        };
        // remove + re-append: time priority is forfeited on modify
        let mut order = match self.orders.remove(position) {
            Some(order) => order,
            None => return false,
        };
        order.set_quantity(new_quantity);
        self.orders.push_back(order);
        true
    }

    /// Removes and returns the head of the queue, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<OrderRecord> {
        self.orders.pop_front()
    }

    /// True if no orders rest in this queue.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders resting in this queue.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Sum of the remaining quantities of all resting orders.
    pub fn total_quantity(&self) -> u64 {
        self.orders.iter().map(|order| order.quantity()).sum()
    }

    /// Iterates the resting orders in time-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.orders.iter()
    }

    /// Returns a snapshot of the resting orders in time-priority order.
    pub fn orders(&self) -> Vec<OrderRecord> {
        self.orders.iter().cloned().collect()
    }
}
