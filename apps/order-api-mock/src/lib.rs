// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order API Mock - Rust Core Library
//!
//! In-memory stand-in for the remote order-management HTTP API. Calling code
//! exercises create/fetch/delete flows against [`MockGateway`] and gets back
//! [`ResponseEnvelope`]s shaped like real HTTP responses, with no network.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: value objects, the `Order` aggregate, payload validation
//! - **Application**: `OrderApiPort`, the interface calling code depends on
//! - **Infrastructure**: the mock gateway, its in-memory store, and the
//!   simulated HTTP envelope
//!
//! # Example
//!
//! ```
//! use order_api_mock::{BASE_URL, MockGateway};
//! use serde_json::json;
//!
//! let mut gateway = MockGateway::new();
//! let order = json!({"volume": 10, "symbol": "EURUSD", "price": 1.23456, "direction": "BUY"});
//!
//! let created = gateway.post(BASE_URL, Some(&order));
//! assert_eq!(created.status_code(), 200);
//! assert_eq!(created.json(), json!({"OrderID": 1}));
//!
//! let missing = gateway.get(&format!("{BASE_URL}?id=2"));
//! assert_eq!(missing.status_code(), 404);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Order rules with no knowledge of the HTTP surface.
pub mod domain;

/// Application layer - Port definitions.
pub mod application;

/// Infrastructure layer - Mock gateway, store and simulated HTTP types.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading for the binary.
pub mod config;

/// Gateway error taxonomy and status mapping.
pub mod error;

/// Request script replay.
pub mod replay;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::order::{Order, Violation, Violations, validate_order, validation_message};
pub use domain::shared::{Direction, DomainError, OrderId, Price, Symbol, Volume};

// Application re-exports
pub use application::ports::OrderApiPort;

// Infrastructure re-exports
pub use infrastructure::gateway::{BASE_URL, MockGateway};
pub use infrastructure::http::{
    CreateOrderResponse, MessageResponse, OrderListing, ResponseEnvelope,
};
pub use infrastructure::persistence::InMemoryOrderStore;

pub use error::{ErrorCode, GatewayError};
