//! Price value object with a fixed fractional precision.
//!
//! Precision is counted on an exact decimal, never on the binary float: the
//! float is rendered to its shortest round-trip text, parsed into a
//! [`Decimal`], stripped of trailing zeros and its scale is read back.
//!
//! | input     | normalized | places |
//! |-----------|------------|--------|
//! | `1.23456` | `1.23456`  | 5      |
//! | `1.23450` | `1.2345`   | 4      |
//! | `1.00000` | `1`        | 0      |

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::shared::DomainError;

/// Number of significant fractional digits every price must carry.
pub const PRICE_DECIMAL_PLACES: u32 = 5;

/// Count the significant fractional digits of a decimal.
///
/// Trailing zeros are not significant; integers count as 0.
#[must_use]
pub fn count_decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Convert a float to the exact decimal its shortest textual form denotes.
///
/// Returns `None` for non-finite values and magnitudes outside `Decimal`'s range.
#[must_use]
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str_exact(&value.to_string()).ok()
}

/// An order price carrying exactly [`PRICE_DECIMAL_PLACES`] fractional digits.
///
/// Serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns error if the value does not have exactly five significant
    /// fractional digits.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        let places = count_decimal_places(value);
        if places != PRICE_DECIMAL_PLACES {
            return Err(DomainError::invalid(
                "price",
                format!("expected {PRICE_DECIMAL_PLACES} decimal places, got {places}"),
            ));
        }
        Ok(Self(value.normalize()))
    }

    /// Create a price from a float as received on the wire.
    ///
    /// # Errors
    ///
    /// Returns error if the float has no exact decimal form or the wrong
    /// number of decimal places.
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        let decimal = decimal_from_f64(value)
            .ok_or_else(|| DomainError::invalid("price", format!("{value} is not representable")))?;
        Self::new(decimal)
    }

    /// Get the exact decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Get the value as the nearest float.
    ///
    /// Goes through the decimal text so the float reads back as the same
    /// shortest form it was parsed from.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_string().parse().ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(1.23456), 5 ; "five places")]
    #[test_case(dec!(1.23450), 4 ; "trailing zero stripped")]
    #[test_case(dec!(1.00000), 0 ; "all zeros")]
    #[test_case(dec!(1.2345), 4 ; "four places")]
    #[test_case(dec!(100), 0 ; "integer")]
    #[test_case(dec!(0.00001), 5 ; "tiny")]
    #[test_case(dec!(-7.65432), 5 ; "negative")]
    fn counts_significant_places(value: Decimal, expected: u32) {
        assert_eq!(count_decimal_places(value), expected);
    }

    #[test_case(1.23456, Some(5) ; "shortest form kept")]
    #[test_case(1.2345, Some(4) ; "four places")]
    #[test_case(1.0, Some(0) ; "whole float")]
    #[test_case(0.1, Some(1) ; "no binary artifacts")]
    #[test_case(1e16, Some(0) ; "large whole")]
    #[test_case(f64::NAN, None ; "nan")]
    #[test_case(f64::INFINITY, None ; "infinity")]
    #[test_case(1e300, None ; "out of range")]
    fn float_places(value: f64, expected: Option<u32>) {
        assert_eq!(decimal_from_f64(value).map(count_decimal_places), expected);
    }

    #[test]
    fn price_requires_five_places() {
        assert!(Price::new(dec!(1.23456)).is_ok());
        assert!(Price::new(dec!(1.2345)).is_err());
        assert!(Price::new(dec!(1.234567)).is_err());
        assert!(Price::from_f64(1.00000).is_err());
    }

    #[test]
    fn price_serializes_as_number() {
        let price = Price::from_f64(1.23456).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "1.23456");
        assert_eq!(price.value(), dec!(1.23456));
    }

    #[test]
    fn price_deserialize_validates() {
        let price: Price = serde_json::from_str("0.98765").unwrap();
        assert_eq!(price.value(), dec!(0.98765));

        assert!(serde_json::from_str::<Price>("0.9876").is_err());
        assert!(serde_json::from_str::<Price>("\"0.98765\"").is_err());
    }
}
