//! Shared Domain Types
//!
//! Value objects and errors shared across the domain.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{
    Direction, OrderId, PRICE_DECIMAL_PLACES, Price, Symbol, Volume, count_decimal_places,
    decimal_from_f64,
};
