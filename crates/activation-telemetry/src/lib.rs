//! # Activation Telemetry
//!
//! Logging setup for processes that build activation requests.
//!
//! The library crates only emit `tracing` events. A binary calls
//! `init_logging` once at startup to route them to stdout, plain or JSON.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use activation_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // build, seal and encode requests
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ACTIVATION_LOG_LEVEL` | `info` | Log filter, falls back to `RUST_LOG` |
//! | `ACTIVATION_JSON_LOGS` | `false` | JSON formatted output |
//! | `ACTIVATION_SERVICE_NAME` | `activation` | Service name in the startup event |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME};
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    /// Invalid configuration, e.g. an unparsable filter.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
