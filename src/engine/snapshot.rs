use crate::core::RacePhase;
use crate::geo::PinLocation;
use serde::{Deserialize, Serialize};

/// Derived metrics after the most recent engine operation.
///
/// Every optional field is recomputed from the current inputs on each
/// step, so nothing here can refer to a superseded fix or pin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub start_time_epoch_millis: Option<i64>,
    pub now_epoch_millis: i64,
    pub pin: Option<PinLocation>,
    /// Great-circle distance from the latest fix to the pin.
    pub distance_meters: Option<f64>,
    /// Passthrough of the latest fix's speed.
    pub speed_mps: Option<f64>,
    /// Distance over speed, only while moving above the motion threshold.
    pub time_to_pin_seconds: Option<f64>,
    /// Whole seconds until the start, truncated toward zero.
    pub delta_to_start_seconds: Option<i64>,
    /// Positive means early at the pin, negative means late.
    pub guidance_seconds: Option<f64>,
    pub is_finished: bool,
    /// Reserved for user-facing text; not populated yet.
    pub message: Option<String>,
}

impl EngineState {
    pub fn phase(&self) -> RacePhase {
        RacePhase::derive(self.start_time_epoch_millis.is_some(), self.is_finished)
    }
}
