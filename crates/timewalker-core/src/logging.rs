//! Subscriber setup for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Installs a global `fmt` subscriber filtered by the configured level.
///
/// `level` accepts anything `EnvFilter` understands, from a bare level such as
/// `debug` to per-target directives like `timewalker=trace,info`.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the level does not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| CoreError::ConfigError(format!("invalid log level {:?}: {e}", config.level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CoreError::ConfigError(e.to_string()))
}
