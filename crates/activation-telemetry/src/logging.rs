//! Structured logging setup.
//!
//! Installs a global `tracing-subscriber` fmt subscriber. JSON output keeps
//! the structured fields the activation crates attach to their events
//! (`variant`, `attributes`, `plaintext_len`, `bytes`).

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::EnvFilter;

/// Parse the configured filter directives.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Initialize the global logger.
///
/// Fails on an unparsable filter, or when a global subscriber is already
/// installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| TelemetryError::LoggerInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "[activation] Logging initialized"
    );
    Ok(())
}
