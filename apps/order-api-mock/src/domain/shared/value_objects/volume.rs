//! Volume value object for order sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Number of units on an order. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Volume(u64);

impl Volume {
    /// Create a volume.
    ///
    /// # Errors
    ///
    /// Returns error if the volume is zero.
    pub fn new(units: u64) -> Result<Self, DomainError> {
        if units == 0 {
            return Err(DomainError::invalid("volume", "Volume must be greater than 0"));
        }
        Ok(Self(units))
    }

    /// Get the number of units.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for Volume {
    type Error = DomainError;

    fn try_from(units: u64) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Volume> for u64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}
