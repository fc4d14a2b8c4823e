//! Error handling for the order API mock.
//!
//! Request failures never escape the gateway: each one is a [`GatewayError`]
//! that converts into a [`ResponseEnvelope`] carrying `{"message": ...}`.
//!
//! # HTTP Status Codes
//!
//! | Code | Usage |
//! |------|-------|
//! | `200 OK` | Request completed |
//! | `400 Bad Request` | Malformed id or invalid order payload |
//! | `404 Not Found` | Unknown route, or id not in the store |

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order::Violations;
use crate::infrastructure::http::ResponseEnvelope;

/// Error codes for the order API mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Routing (NOT_FOUND)
    /// URL does not address the order endpoint.
    RouteNotFound,

    // Validation (BAD_REQUEST)
    /// Delete request without a usable id.
    MissingOrderId,
    /// Id is present but not an integer.
    InvalidOrderId,
    /// Order payload breaks one or more rules.
    InvalidOrder,

    // Lookup (NOT_FOUND)
    /// Well-formed id that is not in the store.
    OrderNotFound,
}

impl ErrorCode {
    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::MissingOrderId | Self::InvalidOrderId | Self::InvalidOrder => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get the error reason string (for logs).
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MissingOrderId => "MISSING_ORDER_ID",
            Self::InvalidOrderId => "INVALID_ORDER_ID",
            Self::InvalidOrder => "INVALID_ORDER",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A request the gateway refuses to serve.
///
/// The `Display` text is exactly the message clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// URL is not the order endpoint.
    #[error("Not Found")]
    RouteNotFound,

    /// Delete payload lacks a truthy `id`.
    #[error("Bad Request. ID is required")]
    MissingOrderId,

    /// Id is not an integer.
    #[error("Bad Request. ID must be an integer")]
    InvalidOrderId,

    /// Order payload failed validation.
    #[error("{0}")]
    InvalidOrder(#[from] Violations),

    /// No order is stored under the id.
    #[error("Order not found")]
    OrderNotFound,
}

impl GatewayError {
    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::RouteNotFound => ErrorCode::RouteNotFound,
            Self::MissingOrderId => ErrorCode::MissingOrderId,
            Self::InvalidOrderId => ErrorCode::InvalidOrderId,
            Self::InvalidOrder(_) => ErrorCode::InvalidOrder,
            Self::OrderNotFound => ErrorCode::OrderNotFound,
        }
    }

    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.code().status()
    }

    /// Convert to the envelope returned to the caller.
    #[must_use]
    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::with_message(self.status(), self.to_string())
    }
}

impl From<GatewayError> for ResponseEnvelope {
    fn from(error: GatewayError) -> Self {
        error.to_envelope()
    }
}
