//! Error types for day-period-filter operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid day period: {0}")]
    InvalidDayPeriod(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
