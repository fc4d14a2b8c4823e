//! Order Bounded Context
//!
//! The order record and the rules a payload must satisfy to become one.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: volume, symbol, price and direction; no identity
//! - **Validation**: presence check first, then per-field rules reported together

pub mod aggregate;
pub mod validation;

pub use aggregate::Order;
pub use validation::{REQUIRED_FIELDS, Violation, Violations, validate_order, validation_message};
