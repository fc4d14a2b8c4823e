//! Order API Mock Binary
//!
//! Replays newline-delimited JSON requests from stdin against a fresh
//! in-memory gateway and prints one JSON response per line on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-api-mock < requests.jsonl
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_MOCK_CONFIG`: path to a YAML config file (default: `order-api-mock.yaml` if present)
//! - `RUST_LOG`: Log filter (default: `order_api_mock=info`)

use std::io;

use anyhow::Context;
use order_api_mock::MockGateway;
use order_api_mock::config::{Config, DEFAULT_CONFIG_PATH, load_config_or_default};
use order_api_mock::replay::Replayer;
use order_api_mock::telemetry::init_tracing;

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "ORDER_MOCK_CONFIG";

fn main() -> anyhow::Result<()> {
    let config = load_settings()?;
    init_tracing(&config.logging)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(
        pretty = config.replay.pretty,
        stop_on_error = config.replay.stop_on_error,
        "Starting order API mock replay"
    );

    let gateway = MockGateway::new();
    tracing::info!(base_url = gateway.base_url(), "Gateway ready");

    let mut replayer = Replayer::new(gateway, config.replay);
    let summary = replayer
        .run(io::stdin().lock(), io::stdout().lock())
        .context("replay failed")?;

    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        orders = replayer.api().len(),
        "Replay finished"
    );
    Ok(())
}

/// Load configuration from `ORDER_MOCK_CONFIG` or the default path. A missing
/// file means built-in defaults.
fn load_settings() -> anyhow::Result<Config> {
    let path = std::env::var(CONFIG_ENV).ok();
    let shown = path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    load_config_or_default(path.as_deref()).with_context(|| format!("loading config from {shown}"))
}
