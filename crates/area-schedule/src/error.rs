//! Error types for area-schedule operations.
//!
//! Validation findings are never errors: they are returned as
//! [`ValidationErrors`](crate::errors::ValidationErrors) data. The types here
//! cover anomalous input and failures of the external store.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),
}

/// Failure reported by an [`AreaStore`](crate::controller::AreaStore) when the
/// remote write does not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Failed to save common area: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
