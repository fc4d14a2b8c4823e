//! Order payload validation.
//!
//! Payloads arrive as loose JSON. Presence of the four required fields is
//! checked first and short-circuits; after that every field is checked and
//! all violations are reported together, in field order.

use std::fmt;

use serde_json::{Map, Value};

use super::Order;
use crate::domain::shared::{Direction, Price, Symbol, Volume};

/// Fields every order payload must carry (non-null).
pub const REQUIRED_FIELDS: [&str; 4] = ["volume", "symbol", "price", "direction"];

/// A single broken rule in an order payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// One or more required fields are absent or null.
    MissingRequiredFields,
    /// Volume is not an integer, or is below 1.
    InvalidVolume,
    /// Symbol is not one of the allowed pairs.
    InvalidSymbol,
    /// Price is not a float with exactly five decimal places.
    InvalidPrice,
    /// Direction is neither BUY nor SELL.
    InvalidDirection,
}

impl Violation {
    /// The message reported to the caller.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "Missing required fields",
            Self::InvalidVolume => "Volume must be an integer greater than 0",
            Self::InvalidSymbol => "Invalid symbol",
            Self::InvalidPrice => "Price must be a number and have 5 decimal points",
            Self::InvalidDirection => "Invalid direction",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Non-empty list of violations found in one payload.
///
/// Displays as the messages joined with `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// The violations, in the order they were found.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Whether a given rule was broken.
    #[must_use]
    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(violation.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Validate a raw order payload and build the [`Order`] it describes.
///
/// A missing payload, or one that is not a JSON object, is treated as an
/// empty object.
///
/// # Errors
///
/// Returns every rule the payload breaks.
pub fn validate_order(payload: Option<&Value>) -> Result<Order, Violations> {
    let empty = Map::new();
    let fields = payload.and_then(Value::as_object).unwrap_or(&empty);

    let [Some(volume), Some(symbol), Some(price), Some(direction)] =
        REQUIRED_FIELDS.map(|name| fields.get(name).filter(|v| !v.is_null()))
    else {
        return Err(Violations(vec![Violation::MissingRequiredFields]));
    };

    let volume = parse_volume(volume);
    let symbol = symbol.as_str().and_then(Symbol::parse);
    let price = parse_price(price);
    let direction = direction.as_str().and_then(Direction::parse);

    match (volume, symbol, price, direction) {
        (Some(volume), Some(symbol), Some(price), Some(direction)) => {
            Ok(Order::new(volume, symbol, price, direction))
        }
        (volume, symbol, price, direction) => {
            let mut violations = Vec::with_capacity(4);
            if volume.is_none() {
                violations.push(Violation::InvalidVolume);
            }
            if symbol.is_none() {
                violations.push(Violation::InvalidSymbol);
            }
            if price.is_none() {
                violations.push(Violation::InvalidPrice);
            }
            if direction.is_none() {
                violations.push(Violation::InvalidDirection);
            }
            Err(Violations(violations))
        }
    }
}

/// Validate a payload and render the outcome as a message.
///
/// Returns an empty string when the payload is valid.
#[must_use]
pub fn validation_message(payload: Option<&Value>) -> String {
    validate_order(payload).err().map(|v| v.to_string()).unwrap_or_default()
}

/// Integers only; floats such as `10.0` and booleans are rejected.
fn parse_volume(value: &Value) -> Option<Volume> {
    value.as_u64().and_then(|units| Volume::new(units).ok())
}

/// Floats only; integer literals such as `1` are rejected.
fn parse_price(value: &Value) -> Option<Price> {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64().and_then(|f| Price::from_f64(f).ok()),
        _ => None,
    }
}
