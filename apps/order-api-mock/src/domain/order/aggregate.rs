//! Order Aggregate
//!
//! A validated trade order as held by the store. Identity lives outside the
//! record: the store assigns the [`OrderId`](crate::domain::shared::OrderId).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::shared::{Direction, Price, Symbol, Volume};

/// A well-formed order.
///
/// Only constructible from valid parts, so a stored order is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    volume: Volume,
    symbol: Symbol,
    price: Price,
    direction: Direction,
}

impl Order {
    /// Create an order from validated parts.
    #[must_use]
    pub const fn new(volume: Volume, symbol: Symbol, price: Price, direction: Direction) -> Self {
        Self {
            volume,
            symbol,
            price,
            direction,
        }
    }

    /// Number of units.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Traded currency pair.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Limit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Buy or sell.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Render the order as the JSON object the API returns.
    ///
    /// Infallible: every field maps onto a JSON scalar.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut fields = Map::with_capacity(4);
        fields.insert("volume".to_string(), Value::from(self.volume.units()));
        fields.insert("symbol".to_string(), Value::from(self.symbol.as_str()));
        fields.insert(
            "price".to_string(),
            self.price.to_f64().map_or(Value::Null, Value::from),
        );
        fields.insert("direction".to_string(), Value::from(self.direction.as_str()));
        Value::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Order {
        Order::new(
            Volume::new(10).unwrap(),
            Symbol::EurUsd,
            Price::from_f64(1.23456).unwrap(),
            Direction::Buy,
        )
    }

    #[test]
    fn to_json_matches_wire_shape() {
        assert_eq!(
            sample().to_json(),
            json!({"volume": 10, "symbol": "EURUSD", "price": 1.23456, "direction": "BUY"})
        );
    }

    #[test]
    fn serde_agrees_with_to_json() {
        let order = sample();
        assert_eq!(serde_json::to_value(&order).unwrap(), order.to_json());

        let parsed: Order = serde_json::from_value(order.to_json()).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn accessors() {
        let order = sample();
        assert_eq!(order.volume().units(), 10);
        assert_eq!(order.symbol(), Symbol::EurUsd);
        assert_eq!(order.direction(), Direction::Buy);
        assert_eq!(order.price().to_string(), "1.23456");
    }
}
