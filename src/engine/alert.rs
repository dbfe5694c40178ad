//! Alert vocabulary and one-shot latches.

use crate::engine::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete signals the driver turns into sound, vibration or navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertEvent {
    #[serde(rename = "BEEP_60")]
    Beep60,
    #[serde(rename = "BEEP_30")]
    Beep30,
    CountdownBeep,
    Go,
    Finish,
}

impl AlertEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beep60 => "BEEP_60",
            Self::Beep30 => "BEEP_30",
            Self::CountdownBeep => "COUNTDOWN_BEEP",
            Self::Go => "GO",
            Self::Finish => "FINISH",
        }
    }
}

impl fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fired-flags for one race attempt.
///
/// Every alert except `CountdownBeep` fires at most once. `CountdownBeep`
/// fires at most once per distinct second, tracked by the last second
/// it was emitted for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertLatches {
    beep_60: bool,
    beep_30: bool,
    go: bool,
    finish: bool,
    last_countdown_second: Option<i64>,
}

impl AlertLatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every alert against the current whole-second delta.
    ///
    /// Alerts are checked in a fixed order and the returned list keeps it.
    /// Only the current delta is considered: a window skipped entirely
    /// between two calls is missed.
    pub fn evaluate(&mut self, delta: i64, config: &EngineConfig) -> Vec<AlertEvent> {
        let mut events = Vec::new();

        if !self.beep_60 && delta > config.second_warning_secs && delta <= config.first_warning_secs
        {
            self.beep_60 = true;
            events.push(AlertEvent::Beep60);
        }

        if !self.beep_30 && delta > config.countdown_from_secs && delta <= config.second_warning_secs
        {
            self.beep_30 = true;
            events.push(AlertEvent::Beep30);
        }

        if (1..=config.countdown_from_secs).contains(&delta)
            && self.last_countdown_second != Some(delta)
        {
            self.last_countdown_second = Some(delta);
            events.push(AlertEvent::CountdownBeep);
        }

        if !self.go && delta == 0 {
            self.go = true;
            events.push(AlertEvent::Go);
        }

        if !self.finish && delta <= -config.finish_after_secs {
            self.finish = true;
            events.push(AlertEvent::Finish);
        }

        events
    }

    pub fn has_fired(&self, event: AlertEvent) -> bool {
        match event {
            AlertEvent::Beep60 => self.beep_60,
            AlertEvent::Beep30 => self.beep_30,
            AlertEvent::CountdownBeep => self.last_countdown_second.is_some(),
            AlertEvent::Go => self.go,
            AlertEvent::Finish => self.finish,
        }
    }

    pub fn last_countdown_second(&self) -> Option<i64> {
        self.last_countdown_second
    }
}
