//! Error types for the daygrid engine.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in schedule operations.
///
/// Out-of-range numeric input is never an error: start offsets and durations
/// are clamped silently. Only identity, capacity, and structural failures
/// surface here.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("No scheduled item with id {0}")]
    NotFound(Uuid),

    #[error("Schedule is at its capacity of {0} items")]
    CapacityExceeded(usize),

    #[error("Export failed: {0}")]
    ExportFailure(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
