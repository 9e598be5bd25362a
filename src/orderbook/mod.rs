//! OrderBook implementation managing price-ordered book sides, time-priority
//! queues and order matching.

pub mod book;
mod error;
mod operations;
pub mod order;
pub mod queue;
pub mod side;
mod snapshot;

pub mod matching;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use order::{OrderId, OrderIdGenerator, OrderRecord, Side};
pub use queue::TimePriorityQueue;
pub use side::BookSide;
pub use snapshot::{OrderBookSnapshot, PriceLevelSnapshot};
