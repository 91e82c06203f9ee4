use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
