use chrono::TimeDelta;
use thiserror::Error;

/// Calendar arithmetic errors
#[derive(Error, Debug)]
pub enum WalkError {
    /// Interval boundaries carry different timezones.
    #[error("Interval boundaries are in different timezones: {start_zone} != {end_zone}, {interval}")]
    TimezoneMismatch {
        start_zone: String,
        end_zone: String,
        interval: String,
    },

    #[error("Invalid calendar unit: {0}")]
    InvalidCalendarUnit(String),

    #[error("Step must be positive, got {0}")]
    NonPositiveStep(TimeDelta),

    #[error("Rounding error: {0}")]
    Rounding(#[from] chrono::RoundingError),

    #[error(transparent)]
    Core(#[from] timewalker_core::error::CoreError),
}

pub type WalkResult<T> = std::result::Result<T, WalkError>;
