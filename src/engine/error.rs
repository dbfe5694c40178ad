//! Configuration errors.

use thiserror::Error;

/// A single rule broken by an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("motion threshold must be finite and non-negative (got {0})")]
    InvalidMotionThreshold(f64),

    #[error("first warning ({first}s) must be later than second warning ({second}s)")]
    WarningsOutOfOrder { first: i64, second: i64 },

    #[error("second warning ({second}s) must be later than countdown start ({countdown}s)")]
    CountdownOverlapsWarning { second: i64, countdown: i64 },

    #[error("countdown must start at 1s or later (got {0}s)")]
    CountdownTooShort(i64),

    #[error("finish delay must be at least 1s (got {0}s)")]
    FinishDelayTooShort(i64),
}

/// Errors that can occur when building or loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("failed to parse engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
