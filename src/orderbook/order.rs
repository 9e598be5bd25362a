//! Order identity and record types.
//!
//! An [`OrderId`] carries the order's side in its least-significant bit, so the
//! side can be recovered from the id alone without touching the book. Ids are
//! minted by an [`OrderIdGenerator`] owned by each `OrderBook` instance, never
//! by a process-global counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The side of an order: buy (bid) or sell (ask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bid)
    Buy,
    /// Sell side (ask)
    Sell,
}

impl Side {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// The bit stored in an order id's least-significant position for this side.
    pub fn bit(&self) -> u64 {
        match self {
            Side::Buy => 1,
            Side::Sell => 0,
        }
    }

    /// Recovers the side from an id's least-significant bit.
    pub fn from_bit(bit: u64) -> Self {
        if bit & 1 == 1 { Side::Buy } else { Side::Sell }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Unique identifier of an order.
///
/// Encoded as `(sequence << 1) | side_bit` where the side bit is 1 for buy and
/// 0 for sell. The encoding is a documented invariant of the public API:
/// callers and the book itself may derive the side from the id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Builds an id from a sequence number and a side.
    pub fn from_parts(sequence: u64, side: Side) -> Self {
        OrderId((sequence << 1) | side.bit())
    }

    /// Builds an id from its raw encoded value.
    pub fn from_u64(raw: u64) -> Self {
        OrderId(raw)
    }

    /// The raw encoded value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The side encoded in the id's least-significant bit.
    pub fn side(&self) -> Side {
        Side::from_bit(self.0)
    }

    /// The sequence number the id was minted from.
    pub fn sequence(&self) -> u64 {
        self.0 >> 1
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints monotonically increasing order ids for one book instance.
///
/// Each book owns its own generator, so separate books (and separate tests)
/// never interfere with each other's id sequences.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    next_sequence: u64,
}

impl OrderIdGenerator {
    /// Creates a generator starting at sequence 0.
    pub fn new() -> Self {
        Self { next_sequence: 0 }
    }

    /// Returns the next id for the given side and advances the sequence.
    pub fn next_id(&mut self, side: Side) -> OrderId {
        let id = OrderId::from_parts(self.next_sequence, side);
        self.next_sequence += 1;
        id
    }
}

/// A single limit order resting in (or headed for) the book.
///
/// Identity, price and side are fixed at construction; quantity is the only
/// mutable field and is decremented by fills or replaced by modifies. A record
/// is owned by exactly one price-level queue at a time, or by no container at
/// all once filled or cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    id: OrderId,
    price: u64,
    quantity: u64,
    side: Side,
}

impl OrderRecord {
    /// Creates a record. The id's encoded side must agree with `side`.
    pub fn new(id: OrderId, price: u64, quantity: u64, side: Side) -> Self {
        debug_assert_eq!(id.side(), side, "order id side bit disagrees with side");
        Self {
            id,
            price,
            quantity,
            side,
        }
    }

    /// The order's unique id.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The order's limit price in ticks. Immutable for the record's lifetime.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// The remaining (unfilled) quantity.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// The order's side, always equal to `self.id().side()`.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Replaces the remaining quantity. Used by modify.
    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    /// Decrements the remaining quantity by a fill. Saturates at zero so a
    /// fill can never drive the quantity negative.
    pub(crate) fn fill(&mut self, fill_quantity: u64) {
        self.quantity = self.quantity.saturating_sub(fill_quantity);
    }

    /// True once the order has no remaining quantity.
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {{ id: {}, price: {}, quantity: {}, side: {} }}",
            self.id, self.price, self.quantity, self.side
        )
    }
}
