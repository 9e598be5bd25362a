//! Order book operations: adding, cancelling and modifying orders.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{OrderId, OrderRecord, Side};
use tracing::{trace, warn};

impl OrderBook {
    /// Add a limit order to the book.
    ///
    /// Validates the input, mints an id for the order, inserts it at its price
    /// level and runs the crossing loop. Returns the new order's id; the
    /// caller needs it for later cancels and modifies.
    pub fn add_limit_order(
        &mut self,
        price: u64,
        quantity: u64,
        side: Side,
    ) -> Result<OrderId, OrderBookError> {
        if price == 0 {
            return Err(OrderBookError::InvalidPrice(price));
        }
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(quantity));
        }

        let id = self.id_generator.next_id(side);
        let order = OrderRecord::new(id, price, quantity, side);
        trace!("Adding limit order {} {} {} {}", id, price, quantity, side);
        self.add_order(order)
    }

    /// Add a caller-constructed order record to the book.
    ///
    /// Ownership of the record transfers to the book. The record is validated
    /// before any mutation: an invalid price or quantity leaves the book
    /// untouched.
    pub fn add_order(&mut self, order: OrderRecord) -> Result<OrderId, OrderBookError> {
        if order.price() == 0 {
            return Err(OrderBookError::InvalidPrice(order.price()));
        }
        if order.quantity() == 0 {
            return Err(OrderBookError::InvalidQuantity(order.quantity()));
        }

        let id = order.id();
        let price = order.price();
        let side = order.side();
        trace!(
            "Order book {}: Adding order {} at price {} for side {}",
            self.symbol, id, price, side
        );

        self.side_mut(side).insert(order);
        self.order_locations.insert(id, price);

        // Every add may create a cross; cancel and modify never do.
        self.match_resting_orders();

        Ok(id)
    }

    /// Cancel a resting order by id.
    ///
    /// The side comes from the id's low bit, the price from the location
    /// index. Returns the removed record. A missing id yields
    /// [`OrderBookError::OrderNotFound`]: reported, non-fatal, and the book is
    /// left untouched. Cancelling cannot create a cross, so the crossing loop
    /// is not re-run.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Result<OrderRecord, OrderBookError> {
        let side = order_id.side();
        let Some(price) = self.order_locations.get(&order_id).copied() else {
            warn!("Order book {}: Order not found: {}", self.symbol, order_id);
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        match self.side_mut(side).remove(price, order_id) {
            Some(removed) => {
                self.order_locations.remove(&order_id);
                trace!(
                    "Order book {}: Cancelled order {} at price {}",
                    self.symbol, order_id, price
                );
                Ok(removed)
            }
            None => {
                // Index said the order was there but the side disagrees; the
                // stale entry must not survive.
                self.order_locations.remove(&order_id);
                warn!("Order book {}: Order not found: {}", self.symbol, order_id);
                Err(OrderBookError::OrderNotFound(order_id))
            }
        }
    }

    /// Replace a resting order's quantity.
    ///
    /// The order keeps its id and price but moves to the tail of its price
    /// level: a quantity modification forfeits time priority against every
    /// order already resting there (cancel-and-replace semantics). A new
    /// quantity of zero drops the order entirely. Modifying never re-runs the
    /// crossing loop, even when the new quantity would now cross; the next
    /// add picks the cross up.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        new_quantity: u64,
    ) -> Result<(), OrderBookError> {
        if new_quantity == 0 {
            // Fully reduced orders leave the book instead of resting at zero.
            return self.cancel_order(order_id).map(|_| ());
        }

        let side = order_id.side();
        let Some(price) = self.order_locations.get(&order_id).copied() else {
            warn!("Order book {}: Order not found: {}", self.symbol, order_id);
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        if self.side_mut(side).modify(price, order_id, new_quantity) {
            trace!(
                "Order book {}: Modified order {} at price {} to quantity {}",
                self.symbol, order_id, price, new_quantity
            );
            Ok(())
        } else {
            self.order_locations.remove(&order_id);
            warn!("Order book {}: Order not found: {}", self.symbol, order_id);
            Err(OrderBookError::OrderNotFound(order_id))
        }
    }
}
