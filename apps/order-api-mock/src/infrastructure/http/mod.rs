//! Simulated HTTP surface.
//!
//! Envelope type, request parsing and response DTOs shared by the gateway and
//! its callers. Nothing here opens a socket.

mod envelope;
mod request;
mod response;

pub use envelope::ResponseEnvelope;
pub use request::*;
pub use response::*;
