//! Order identifier assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive integer key of a stored order.
///
/// Serialized as a bare number (`{"OrderID": 3}`); as a map key it becomes the
/// decimal string (`{"3": {...}}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// The id handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Create an identifier, rejecting zero.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Build an identifier from any signed integer.
    ///
    /// Returns `None` for zero and negative values, which can never be keys.
    #[must_use]
    pub fn from_i64(value: i64) -> Option<Self> {
        u64::try_from(value).ok().and_then(Self::new)
    }

    /// Get the inner value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
