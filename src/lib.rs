//! # Continuous Limit Order Matching Core
//!
//! A single-instrument limit order matching engine written in Rust. The crate
//! provides the order book data structure (per-side price levels with
//! time-ordered queues) and the mutation and matching algorithms on top of
//! it: add, cancel, modify, and a crossing loop that trades resting orders
//! whenever the best bid meets or exceeds the best ask.
//!
//! ## Key Features
//!
//! - **Price-time priority**: Each side keeps its levels in price order (bids
//!   highest-first, asks lowest-first) and each level serves orders strictly
//!   first-in-first-out. A quantity modification re-queues the order at the
//!   tail of its level, forfeiting its time priority.
//!
//! - **Continuous crossing**: Every add runs the crossing loop to completion,
//!   so a crossed book is never observable from outside: after any call
//!   returns, either one side is empty or best bid < best ask.
//!
//! - **Partial-fill bookkeeping**: Matches trade `min` of the two remaining
//!   quantities; a partially filled order keeps its price and goes back to
//!   the tail of its own level.
//!
//! - **Constant-time cancel/modify**: An order-location index maps each id to
//!   its resting price, and the id itself encodes the side in its low bit, so
//!   neither operation scans the book.
//!
//! - **Single-writer by construction**: All mutating operations take
//!   `&mut self`; exclusive access is enforced by the borrow checker rather
//!   than by locks. Wrap the book in one mutex if multiple submitters must
//!   share it.
//!
//! ## What this crate does not do
//!
//! The core emits no trade log, does not change prices via modify, does not
//! persist state, and has no network surface. Fills are observable only as
//! quantity deltas on the resting orders; a consumer that needs a trade
//! ledger is an external collaborator.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{OrderBook, Side};
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! // A bid at 10000 ticks and an ask at 9500 ticks cross immediately.
//! let bid = book.add_limit_order(10_000, 10, Side::Buy).unwrap();
//! book.add_limit_order(9_500, 4, Side::Sell).unwrap();
//!
//! // The ask was fully consumed; 6 remain on the bid.
//! assert_eq!(book.best_ask(), None);
//! assert_eq!(book.get_order(bid).unwrap().quantity(), 6);
//! ```

pub mod orderbook;

mod utils;

pub use orderbook::{
    BookSide, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderIdGenerator,
    OrderRecord, PriceLevelSnapshot, Side, TimePriorityQueue,
};
pub use utils::current_time_millis;
