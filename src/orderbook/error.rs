//! Order book error types

use super::order::OrderId;
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order not found in the book
    OrderNotFound(OrderId),

    /// Price outside the valid range (zero)
    InvalidPrice(u64),

    /// Quantity outside the valid range (zero on add)
    InvalidQuantity(u64),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::InvalidPrice(price) => write!(f, "Invalid price: {}", price),
            OrderBookError::InvalidQuantity(quantity) => {
                write!(f, "Invalid quantity: {}", quantity)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
