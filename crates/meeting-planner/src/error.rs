//! Error types for meeting-planner operations.

use thiserror::Error;

/// Caller-input validation failures. There are no transient errors: a failed
/// call leaves every participant and planner untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A busy interval (or any interval) whose start is not before its end.
    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: i64, end: i64 },

    /// A meeting duration that is zero or negative.
    #[error("Invalid duration: {0} (must be positive)")]
    InvalidDuration(i64),

    /// A search window whose start is not before its end.
    #[error("Invalid window: start {start} must be before end {end}")]
    InvalidWindow { start: i64, end: i64 },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
