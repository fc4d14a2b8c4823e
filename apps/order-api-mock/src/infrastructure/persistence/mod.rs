//! Persistence Adapters
//!
//! The in-process store behind the mock gateway. Nothing survives the process.

pub mod in_memory;

pub use in_memory::InMemoryOrderStore;
