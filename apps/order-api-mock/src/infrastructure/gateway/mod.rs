//! Gateway Adapters
//!
//! Implementations of [`OrderApiPort`](crate::application::ports::OrderApiPort).

mod mock;

pub use mock::{BASE_URL, MockGateway, ORDER_DELETED};
