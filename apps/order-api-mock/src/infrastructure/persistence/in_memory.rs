//! In-memory order store backing the mock gateway.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::order::Order;
use crate::domain::shared::OrderId;

/// A stored order: the typed record plus the payload exactly as submitted.
#[derive(Debug, Clone, PartialEq)]
struct StoredOrder {
    order: Order,
    payload: Value,
}

/// Orders keyed by id, kept for the lifetime of the owning gateway.
///
/// The next id is always one more than the current maximum key, so deleting
/// the newest order frees its id while gaps lower down stay unfilled.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: BTreeMap<OrderId, StoredOrder>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up an order.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id).map(|stored| &stored.order)
    }

    /// Look up the payload an order was submitted with.
    #[must_use]
    pub fn payload(&self, id: OrderId) -> Option<&Value> {
        self.orders.get(&id).map(|stored| &stored.payload)
    }

    /// Check whether an id is stored.
    #[must_use]
    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// The id the next insert will receive.
    #[must_use]
    pub fn next_id(&self) -> OrderId {
        self.orders
            .keys()
            .next_back()
            .copied()
            .map_or(OrderId::FIRST, OrderId::next)
    }

    /// Store a validated order with its submitted payload under a fresh id.
    pub fn insert(&mut self, order: Order, payload: Value) -> OrderId {
        let id = self.next_id();
        self.orders.insert(id, StoredOrder { order, payload });
        id
    }

    /// Remove an order, returning it if it was stored.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id).map(|stored| stored.order)
    }

    /// Iterate over stored orders in id order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &Order)> {
        self.orders.iter().map(|(id, stored)| (*id, &stored.order))
    }

    /// Render the whole store as `{"<id>": payload, ...}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let entries: Map<String, Value> = self
            .orders
            .iter()
            .map(|(id, stored)| (id.to_string(), stored.payload.clone()))
            .collect();
        Value::Object(entries)
    }
}
