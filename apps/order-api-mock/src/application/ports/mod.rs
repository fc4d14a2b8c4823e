//! Application Ports
//!
//! Interfaces the application depends on, implemented by infrastructure adapters.

mod order_api_port;

pub use order_api_port::OrderApiPort;
