//! Timing policy for the start sequence.

use crate::engine::error::{ConfigError, ConfigViolation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Thresholds the engine evaluates on every step.
///
/// The defaults are the standard pursuit-start policy: warnings at T-60
/// and T-30, a beep every second from T-10, GO at T-0 and auto-finish
/// twenty seconds after the gun.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Time-to-pin is only computed when speed is strictly above this.
    pub motion_threshold_mps: f64,
    /// `BEEP_60` fires in `(second_warning_secs, first_warning_secs]`.
    pub first_warning_secs: i64,
    /// `BEEP_30` fires in `(countdown_from_secs, second_warning_secs]`.
    pub second_warning_secs: i64,
    /// `COUNTDOWN_BEEP` fires once per second in `1..=countdown_from_secs`.
    pub countdown_from_secs: i64,
    /// `FINISH` fires once `delta <= -finish_after_secs`.
    pub finish_after_secs: i64,
    /// When set, every `set_start_time` starts a new race attempt.
    pub rearm_resets_latches: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            motion_threshold_mps: 0.3,
            first_warning_secs: 60,
            second_warning_secs: 30,
            countdown_from_secs: 10,
            finish_after_secs: 20,
            rearm_resets_latches: false,
        }
    }
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

impl EngineConfig {
    /// Validate every rule, reporting all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = vec![
            check(
                self.motion_threshold_mps.is_finite() && self.motion_threshold_mps >= 0.0,
                || ConfigViolation::InvalidMotionThreshold(self.motion_threshold_mps),
            ),
            check(self.first_warning_secs > self.second_warning_secs, || {
                ConfigViolation::WarningsOutOfOrder {
                    first: self.first_warning_secs,
                    second: self.second_warning_secs,
                }
            }),
            check(self.second_warning_secs > self.countdown_from_secs, || {
                ConfigViolation::CountdownOverlapsWarning {
                    second: self.second_warning_secs,
                    countdown: self.countdown_from_secs,
                }
            }),
            check(self.countdown_from_secs >= 1, || {
                ConfigViolation::CountdownTooShort(self.countdown_from_secs)
            }),
            check(self.finish_after_secs >= 1, || {
                ConfigViolation::FinishDelayTooShort(self.finish_after_secs)
            }),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }

    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent builder for [`EngineConfig`].
///
/// # Example
///
/// ```rust
/// use pursuit_start::engine::EngineConfigBuilder;
///
/// let config = EngineConfigBuilder::new()
///     .motion_threshold_mps(0.5)
///     .finish_after_secs(30)
///     .build()
///     .unwrap();
/// assert_eq!(config.finish_after_secs, 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion_threshold_mps(mut self, mps: f64) -> Self {
        self.config.motion_threshold_mps = mps;
        self
    }

    pub fn first_warning_secs(mut self, secs: i64) -> Self {
        self.config.first_warning_secs = secs;
        self
    }

    pub fn second_warning_secs(mut self, secs: i64) -> Self {
        self.config.second_warning_secs = secs;
        self
    }

    pub fn countdown_from_secs(mut self, secs: i64) -> Self {
        self.config.countdown_from_secs = secs;
        self
    }

    pub fn finish_after_secs(mut self, secs: i64) -> Self {
        self.config.finish_after_secs = secs;
        self
    }

    /// Reset all alert latches whenever a new start time is set.
    pub fn rearm_resets_latches(mut self, reset: bool) -> Self {
        self.config.rearm_resets_latches = reset;
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
