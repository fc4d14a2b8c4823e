//! Shared Value Objects
//!
//! Immutable domain types that make up an order.
//! Value objects are compared by value, not identity.

mod direction;
mod identifiers;
mod price;
mod symbol;
mod volume;

pub use direction::Direction;
pub use identifiers::OrderId;
pub use price::{PRICE_DECIMAL_PLACES, Price, count_decimal_places, decimal_from_f64};
pub use symbol::Symbol;
pub use volume::Volume;
