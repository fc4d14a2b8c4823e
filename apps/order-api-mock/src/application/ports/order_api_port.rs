//! Order API Port (Driven Port)
//!
//! Interface of the remote order-management API as seen by calling code.
//! Code written against this port can be handed the in-memory
//! [`MockGateway`](crate::infrastructure::gateway::MockGateway) in tests.

use serde_json::Value;

use crate::infrastructure::http::ResponseEnvelope;

/// The three routes of the order API.
///
/// Every call answers with an envelope; failures are encoded in its status
/// and body, never as `Err` or a panic.
pub trait OrderApiPort {
    /// List all orders, or fetch one with `?id=<n>`.
    fn get(&self, url: &str) -> ResponseEnvelope;

    /// Create an order from a JSON payload.
    fn post(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope;

    /// Delete the order named by `{"id": <n>}`.
    fn delete(&mut self, url: &str, payload: Option<&Value>) -> ResponseEnvelope;
}
