//! Simulated HTTP response.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Status code plus JSON body, shaped like a client library's response.
///
/// The body is either the structured payload given at construction or, when
/// none was given, `{"message": <message>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    status: StatusCode,
    body: Option<Value>,
    message: Value,
}

impl ResponseEnvelope {
    /// Create an envelope.
    ///
    /// `message` is only surfaced when `body` is `None`.
    #[must_use]
    pub fn new(status: StatusCode, body: Option<Value>, message: impl Into<Value>) -> Self {
        Self {
            status,
            body,
            message: message.into(),
        }
    }

    /// Envelope whose body is the given payload.
    #[must_use]
    pub fn with_body(status: StatusCode, body: Value) -> Self {
        Self::new(status, Some(body), "")
    }

    /// Envelope whose body is `{"message": message}`.
    #[must_use]
    pub fn with_message(status: StatusCode, message: impl Into<Value>) -> Self {
        Self::new(status, None, message)
    }

    /// HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP status as a bare integer.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The effective body.
    #[must_use]
    pub fn json(&self) -> Value {
        match &self.body {
            Some(body) => body.clone(),
            None => json!({ "message": self.message }),
        }
    }

    /// Deserialize the effective body into a typed response.
    ///
    /// # Errors
    ///
    /// Returns error if the body does not have the shape of `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.json())
    }
}
