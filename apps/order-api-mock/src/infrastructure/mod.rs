//! Infrastructure Layer
//!
//! Adapters implementing the application ports.
//!
//! - `gateway`: the in-memory mock of the order API
//! - `http`: response envelope, request parsing, response DTOs
//! - `persistence`: the in-memory order store

pub mod gateway;
pub mod http;
pub mod persistence;
