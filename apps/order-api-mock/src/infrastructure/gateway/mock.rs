//! Mock order gateway.
//!
//! Answers GET/POST/DELETE for the order endpoint from an in-memory store,
//! returning simulated HTTP responses without any network traffic.

use http::StatusCode;
use serde_json::{Map, Value, json};

use crate::application::ports::OrderApiPort;
use crate::domain::order::{Order, validate_order};
use crate::domain::shared::OrderId;
use crate::error::GatewayError;
use crate::infrastructure::http::{ResponseEnvelope, parse_delete_body, parse_id_param, query_param};
use crate::infrastructure::persistence::InMemoryOrderStore;

/// The only endpoint the mock serves.
pub const BASE_URL: &str = "https://api.example.com/data";

/// Message returned after a successful delete.
pub const ORDER_DELETED: &str = "Order deleted";

/// In-memory stand-in for the order-management API.
///
/// One instance owns one store; create a fresh gateway per test.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    store: InMemoryOrderStore,
}

impl MockGateway {
    /// Create a gateway with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The endpoint this gateway answers on.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        BASE_URL
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a stored order directly.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.store.get(id)
    }

    /// `GET <base>` or `GET <base>?id=<n>`.
    ///
    /// Any URL starting with the base is routed here, query string included.
    #[must_use]
    pub fn get(&self, url: &str) -> ResponseEnvelope {
        let response = self.try_get(url).unwrap_or_else(Self::reject);
        tracing::debug!(url, status = response.status_code(), "GET handled");
        response
    }

    /// `POST <base>` with an order payload.
    pub fn post(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope {
        let response = self.try_post(url, payload).unwrap_or_else(Self::reject);
        tracing::debug!(url, status = response.status_code(), "POST handled");
        response
    }

    /// `DELETE <base>` with `{"id": <n>}`.
    pub fn delete(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope {
        let response = self.try_delete(url, payload).unwrap_or_else(Self::reject);
        tracing::debug!(url, status = response.status_code(), "DELETE handled");
        response
    }

    fn try_get(&self, url: &str) -> Result<ResponseEnvelope, GatewayError> {
        if !url.starts_with(BASE_URL) {
            return Err(GatewayError::RouteNotFound);
        }

        let Some(raw_id) = query_param(url, "id") else {
            return Ok(ResponseEnvelope::with_body(StatusCode::OK, self.store.to_json()));
        };

        let id = parse_id_param(&raw_id)?.ok_or(GatewayError::OrderNotFound)?;
        let payload = self.store.payload(id).ok_or(GatewayError::OrderNotFound)?;

        let mut body = Map::with_capacity(1);
        body.insert(id.to_string(), payload.clone());
        Ok(ResponseEnvelope::with_body(StatusCode::OK, Value::Object(body)))
    }

    fn try_post(
        &mut self,
        url: &str,
        payload: Option<&Value>,
    ) -> Result<ResponseEnvelope, GatewayError> {
        if url != BASE_URL {
            return Err(GatewayError::RouteNotFound);
        }

        let order = validate_order(payload)?;
        // Stored as submitted; validation has already proven it an object.
        let submitted = payload.cloned().unwrap_or_else(|| order.to_json());
        let order_id = self.store.insert(order, submitted);

        tracing::info!(order_id = %order_id, orders = self.store.len(), "Order created");
        Ok(ResponseEnvelope::with_body(
            StatusCode::OK,
            json!({ "OrderID": order_id.get() }),
        ))
    }

    fn try_delete(
        &mut self,
        url: &str,
        payload: Option<&Value>,
    ) -> Result<ResponseEnvelope, GatewayError> {
        if url != BASE_URL {
            return Err(GatewayError::RouteNotFound);
        }

        let order_id = parse_delete_body(payload)?.ok_or(GatewayError::OrderNotFound)?;
        self.store
            .remove(order_id)
            .ok_or(GatewayError::OrderNotFound)?;

        tracing::info!(order_id = %order_id, orders = self.store.len(), "Order deleted");
        Ok(ResponseEnvelope::with_message(StatusCode::OK, ORDER_DELETED))
    }

    fn reject(error: GatewayError) -> ResponseEnvelope {
        tracing::warn!(
            code = %error.code(),
            status = error.status().as_u16(),
            message = %error,
            "Request rejected"
        );
        error.to_envelope()
    }
}

impl OrderApiPort for MockGateway {
    fn get(&self, url: &str) -> ResponseEnvelope {
        Self::get(self, url)
    }

    fn post(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope {
        Self::post(self, url, payload)
    }

    fn delete(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope {
        Self::delete(self, url, payload)
    }
}
