//! HTTP response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;
use crate::domain::shared::OrderId;

/// Response from order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// Id assigned to the new order.
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
}

/// Message-only response (errors and delete confirmations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Orders keyed by id, as returned by `GET`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderListing(pub BTreeMap<OrderId, Order>);

impl OrderListing {
    /// Look up an order in the listing.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.0.get(&id)
    }

    /// Number of orders in the listing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_order_response_wire_name() {
        let resp = CreateOrderResponse {
            order_id: OrderId::FIRST,
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"OrderID":1}"#);
    }

    #[test]
    fn order_listing_from_json() {
        let body = json!({
            "2": {"volume": 5, "symbol": "JPYUSD", "price": 0.00123, "direction": "SELL"}
        });

        let listing: OrderListing = serde_json::from_value(body).unwrap();
        assert_eq!(listing.len(), 1);
        let order = listing.get(OrderId::new(2).unwrap()).unwrap();
        assert_eq!(order.volume().units(), 5);
    }

    #[test]
    fn empty_listing() {
        let listing: OrderListing = serde_json::from_value(json!({})).unwrap();
        assert!(listing.is_empty());
    }
}
