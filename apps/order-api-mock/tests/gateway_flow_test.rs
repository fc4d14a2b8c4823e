//! Integration tests for the mock gateway.
//!
//! Drives full create/fetch/delete flows through the public API and checks
//! the simulated HTTP responses end to end.

#![allow(clippy::unwrap_used)]

use order_api_mock::{
    BASE_URL, CreateOrderResponse, Direction, MessageResponse, MockGateway, OrderApiPort, OrderId,
    OrderListing, Symbol,
};
use serde_json::{Value, json};

fn order_payload(volume: u64, symbol: &str, price: f64, direction: &str) -> Value {
    json!({"volume": volume, "symbol": symbol, "price": price, "direction": direction})
}

fn by_id(id: u64) -> String {
    format!("{BASE_URL}?id={id}")
}

#[test]
fn test_create_fetch_round_trip() {
    let mut gateway = MockGateway::new();

    let created = gateway.post(BASE_URL, Some(&order_payload(10, "EURUSD", 1.23456, "BUY")));
    assert_eq!(created.status_code(), 200);
    let created: CreateOrderResponse = created.json_as().unwrap();
    assert_eq!(created.order_id.get(), 1);

    let fetched = gateway.get(&by_id(1));
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(
        fetched.json(),
        json!({"1": {"volume": 10, "symbol": "EURUSD", "price": 1.23456, "direction": "BUY"}})
    );

    let listing: OrderListing = fetched.json_as().unwrap();
    let order = listing.get(created.order_id).unwrap();
    assert_eq!(order.symbol(), Symbol::EurUsd);
    assert_eq!(order.direction(), Direction::Buy);
    assert_eq!(order.volume().units(), 10);
}

#[test]
fn test_delete_then_fetch_is_not_found() {
    let mut gateway = MockGateway::new();
    gateway.post(BASE_URL, Some(&order_payload(10, "EURUSD", 1.23456, "BUY")));

    let deleted = gateway.delete(BASE_URL, Some(&json!({"id": 1})));
    assert_eq!(deleted.status_code(), 200);
    let deleted: MessageResponse = deleted.json_as().unwrap();
    assert_eq!(deleted.message, "Order deleted");

    let fetched = gateway.get(&by_id(1));
    assert_eq!(fetched.status_code(), 404);
    assert_eq!(fetched.json(), json!({"message": "Order not found"}));

    let again = gateway.delete(BASE_URL, Some(&json!({"id": 1})));
    assert_eq!(again.status_code(), 404);
    assert!(gateway.is_empty());
}

#[test]
fn test_get_is_idempotent() {
    let mut gateway = MockGateway::new();
    gateway.post(BASE_URL, Some(&order_payload(3, "USDEUR", 0.98765, "SELL")));
    gateway.post(BASE_URL, Some(&order_payload(7, "JPYUSD", 0.00712, "BUY")));

    let first = gateway.get(BASE_URL);
    let second = gateway.get(BASE_URL);
    assert_eq!(first, second);
    assert_eq!(gateway.len(), 2);

    let listing: OrderListing = first.json_as().unwrap();
    assert_eq!(listing.len(), 2);
}

#[test]
fn test_next_id_follows_current_max_key() {
    let mut gateway = MockGateway::new();
    gateway.post(BASE_URL, Some(&order_payload(1, "EURUSD", 1.00001, "BUY")));
    gateway.post(BASE_URL, Some(&order_payload(2, "EURUSD", 1.00002, "BUY")));
    gateway.post(BASE_URL, Some(&order_payload(3, "EURUSD", 1.00003, "BUY")));

    // A gap below the max key is left alone.
    gateway.delete(BASE_URL, Some(&json!({"id": 2})));
    let created = gateway.post(BASE_URL, Some(&order_payload(4, "EURUSD", 1.00004, "BUY")));
    assert_eq!(created.json(), json!({"OrderID": 4}));
    assert!(gateway.order(OrderId::new(2).unwrap()).is_none());

    // Removing the max key frees its id.
    gateway.delete(BASE_URL, Some(&json!({"id": 4})));
    let created = gateway.post(BASE_URL, Some(&order_payload(5, "EURUSD", 1.00005, "BUY")));
    assert_eq!(created.json(), json!({"OrderID": 4}));
}

#[test]
fn test_emptied_store_assigns_one() {
    let mut gateway = MockGateway::new();
    gateway.post(BASE_URL, Some(&order_payload(10, "EURUSD", 1.23456, "BUY")));
    gateway.delete(BASE_URL, Some(&json!({"id": 1})));
    assert!(gateway.is_empty());

    let created = gateway.post(BASE_URL, Some(&order_payload(10, "EURUSD", 1.23456, "BUY")));
    assert_eq!(created.json(), json!({"OrderID": 1}));
}

#[test]
fn test_extra_fields_survive_round_trip() {
    let mut gateway = MockGateway::new();
    let mut payload = order_payload(10, "EURUSD", 1.23456, "BUY");
    payload["comment"] = json!("x");
    payload["tags"] = json!(["a", "b"]);

    assert_eq!(gateway.post(BASE_URL, Some(&payload)).status_code(), 200);
    assert_eq!(gateway.get(&by_id(1)).json(), json!({ "1": payload.clone() }));
    assert_eq!(gateway.get(BASE_URL).json(), json!({ "1": payload }));

    let listing: OrderListing = gateway.get(BASE_URL).json_as().unwrap();
    assert_eq!(listing.len(), 1);
}

#[test]
fn test_price_decimal_boundaries() {
    let mut gateway = MockGateway::new();

    let four = gateway.post(BASE_URL, Some(&order_payload(1, "EURUSD", 1.2345, "BUY")));
    assert_eq!(four.status_code(), 400);
    assert_eq!(
        four.json(),
        json!({"message": "Price must be a number and have 5 decimal points"})
    );

    let six = gateway.post(BASE_URL, Some(&order_payload(1, "EURUSD", 1.234_567, "BUY")));
    assert_eq!(six.status_code(), 400);

    let five = gateway.post(BASE_URL, Some(&order_payload(1, "EURUSD", 1.23456, "BUY")));
    assert_eq!(five.status_code(), 200);
    assert_eq!(gateway.len(), 1);
}

#[test]
fn test_combined_violations_in_fixed_order() {
    let mut gateway = MockGateway::new();
    let payload = json!({"volume": 0, "symbol": "GBPUSD", "price": 1.2, "direction": "HOLD"});

    let resp = gateway.post(BASE_URL, Some(&payload));
    assert_eq!(resp.status_code(), 400);
    assert_eq!(
        resp.json(),
        json!({"message": "Volume must be an integer greater than 0, Invalid symbol, \
                           Price must be a number and have 5 decimal points, Invalid direction"})
    );
    assert!(gateway.is_empty());
}

#[test]
fn test_bad_requests_leave_store_untouched() {
    let mut gateway = MockGateway::new();
    gateway.post(BASE_URL, Some(&order_payload(10, "EURUSD", 1.23456, "BUY")));
    let before = gateway.get(BASE_URL);

    let cases = [
        gateway.post(BASE_URL, None),
        gateway.post(BASE_URL, Some(&json!({"volume": 10}))),
        gateway.post("https://api.example.com/other", Some(&order_payload(1, "EURUSD", 1.23456, "BUY"))),
        gateway.delete(BASE_URL, Some(&json!({}))),
        gateway.delete(BASE_URL, Some(&json!({"id": "1"}))),
        gateway.delete(BASE_URL, Some(&json!({"id": 99}))),
    ];
    let statuses: Vec<u16> = cases.iter().map(|r| r.status_code()).collect();
    assert_eq!(statuses, [400, 400, 404, 400, 400, 404]);

    assert_eq!(gateway.get(BASE_URL), before);
}

#[test]
fn test_get_id_query_errors() {
    let gateway = MockGateway::new();

    let not_integer = gateway.get(&format!("{BASE_URL}?id=abc"));
    assert_eq!(not_integer.status_code(), 400);
    assert_eq!(
        not_integer.json(),
        json!({"message": "Bad Request. ID must be an integer"})
    );

    let blank = gateway.get(&format!("{BASE_URL}?id="));
    assert_eq!(blank.status_code(), 200);
    assert_eq!(blank.json(), json!({}));
}

#[test]
fn test_usable_through_port() {
    fn create_and_fetch(api: &mut impl OrderApiPort) -> Value {
        api.post(BASE_URL, Some(&order_payload(5, "JPYUSD", 0.00712, "SELL")));
        api.get(&by_id(1)).json()
    }

    let mut gateway = MockGateway::new();
    let body = create_and_fetch(&mut gateway);
    assert_eq!(body["1"]["direction"], json!("SELL"));
}
