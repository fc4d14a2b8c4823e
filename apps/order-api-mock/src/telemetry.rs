//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; wins over `logging.filter` from the config file
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_api_mock::{config::LoggingConfig, telemetry::init_tracing};
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter: `RUST_LOG` if set and valid, else the configured directives.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global console subscriber.
///
/// Logs go to stderr so stdout stays reserved for replay output.
///
/// # Errors
///
/// Returns error if a global subscriber was already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
}
