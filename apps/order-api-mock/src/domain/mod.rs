//! Domain Layer
//!
//! Core rules with no knowledge of the simulated HTTP surface.
//!
//! # Modules
//!
//! - `shared`: value objects (`OrderId`, `Symbol`, `Direction`, `Volume`, `Price`)
//! - `order`: the `Order` aggregate and payload validation

pub mod order;
pub mod shared;
