//! Additional tests exercising add/cancel/modify flows through the public API.

use matchbook_rs::{OrderBook, OrderBookError, OrderId, OrderRecord, Side};

#[test]
fn test_lifecycle_add_modify_cancel() {
    let mut book = OrderBook::new("TEST");
    let id = book.add_limit_order(10_000, 10, Side::Buy).unwrap();

    book.modify_order(id, 25).unwrap();
    assert_eq!(book.get_order(id).unwrap().quantity(), 25);

    let removed = book.cancel_order(id).unwrap();
    assert_eq!(removed.quantity(), 25);
    assert_eq!(book.order_count(), 0);
}

#[test]
fn test_errors_are_reported_not_fatal() {
    let mut book = OrderBook::new("TEST");
    let resting = book.add_limit_order(10_000, 10, Side::Buy).unwrap();
    let unknown = OrderId::from_parts(500, Side::Sell);

    // A stream of failing calls leaves the book fully usable.
    assert!(book.cancel_order(unknown).is_err());
    assert!(book.modify_order(unknown, 5).is_err());
    assert!(book.add_limit_order(0, 5, Side::Sell).is_err());
    assert!(book.add_limit_order(10_000, 0, Side::Sell).is_err());

    assert_eq!(book.order_count(), 1);
    book.modify_order(resting, 12).unwrap();
    assert_eq!(book.get_order(resting).unwrap().quantity(), 12);
}

#[test]
fn test_error_messages() {
    let mut book = OrderBook::new("TEST");
    let unknown = OrderId::from_parts(21, Side::Buy);

    let error = book.cancel_order(unknown).unwrap_err();
    assert_eq!(error.to_string(), format!("Order not found: {}", unknown));

    let error = book.add_limit_order(10_000, 0, Side::Buy).unwrap_err();
    assert_eq!(error.to_string(), "Invalid quantity: 0");
}

#[test]
fn test_add_order_rejects_invalid_record() {
    let mut book = OrderBook::new("TEST");
    let id = OrderId::from_parts(0, Side::Buy);
    let order = OrderRecord::new(id, 10_000, 0, Side::Buy);

    assert_eq!(
        book.add_order(order),
        Err(OrderBookError::InvalidQuantity(0))
    );
}

#[test]
fn test_many_orders_cancel_all() {
    let mut book = OrderBook::new("TEST");
    let mut ids = Vec::new();
    for i in 0..50u64 {
        // Bids strictly below asks so nothing crosses.
        ids.push(book.add_limit_order(9_000 + i, 5, Side::Buy).unwrap());
        ids.push(book.add_limit_order(11_000 + i, 5, Side::Sell).unwrap());
    }
    assert_eq!(book.order_count(), 100);

    for id in &ids {
        book.cancel_order(*id).unwrap();
    }
    assert_eq!(book.order_count(), 0);
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_ask(), None);

    // Every level was cleaned up along with its orders.
    let (bid_volumes, ask_volumes) = book.get_volume_by_price();
    assert!(bid_volumes.is_empty());
    assert!(ask_volumes.is_empty());
}

#[test]
fn test_cancel_derives_side_from_id() {
    let mut book = OrderBook::new("TEST");
    let buy = book.add_limit_order(10_000, 10, Side::Buy).unwrap();
    let sell = book.add_limit_order(10_100, 10, Side::Sell).unwrap();

    assert_eq!(buy.side(), Side::Buy);
    assert_eq!(sell.side(), Side::Sell);

    book.cancel_order(sell).unwrap();
    assert_eq!(book.best_ask(), None);
    assert_eq!(book.best_bid(), Some(10_000));

    book.cancel_order(buy).unwrap();
    assert_eq!(book.best_bid(), None);
}

#[test]
fn test_modify_zero_then_not_found() {
    let mut book = OrderBook::new("TEST");
    let id = book.add_limit_order(10_000, 10, Side::Buy).unwrap();

    book.modify_order(id, 0).unwrap();
    assert_eq!(
        book.modify_order(id, 5),
        Err(OrderBookError::OrderNotFound(id))
    );
}
