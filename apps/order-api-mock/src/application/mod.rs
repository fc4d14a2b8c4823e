//! Application Layer
//!
//! Port definitions that calling code programs against.

pub mod ports;
