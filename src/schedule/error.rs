//! Start-time entry errors.

use thiserror::Error;

/// A time-of-day field outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldViolation {
    #[error("hour {0} is not in 0..=23")]
    Hour(u32),

    #[error("minute {0} is not in 0..=59")]
    Minute(u32),

    #[error("second {0} is not in 0..=59")]
    Second(u32),
}

/// Errors that can occur when turning user input into a start time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("invalid format {0:?}, expected HH:MM:SS (24h)")]
    Malformed(String),

    #[error("time out of range: {}", format_violations(.0))]
    OutOfRange(Vec<FieldViolation>),

    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
