//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Period too long: {0}")]
    PeriodTooLong(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Reject `value` unless it lies in `min..=max`.
///
/// Shared guard for every numeric value-object constructor.
pub(crate) fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ScheduleError::OutOfRange(format!(
            "{field} must be between {min} and {max}, got {value}"
        )))
    }
}
