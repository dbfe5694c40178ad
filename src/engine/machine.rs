//! The start-sequence state machine.

use crate::core::{PhaseHistory, PhaseTransition, RacePhase, State};
use crate::engine::alert::{AlertEvent, AlertLatches};
use crate::engine::config::EngineConfig;
use crate::engine::snapshot::EngineState;
use crate::geo::{distance_to_pin, GeoFix, PinLocation};
use tracing::{debug, info, trace};

/// Countdown and guidance engine for one boat.
///
/// Single-owner and synchronous: all calls are expected from one logical
/// sequence. The engine owns no timers and never reads a clock; the
/// driver pushes `now` and the latest fix into [`step`](Self::step).
///
/// # Example
///
/// ```rust
/// use pursuit_start::engine::{AlertEvent, PursuitEngine};
/// use pursuit_start::geo::GeoFix;
///
/// let start = 1_700_000_000_000;
/// let mark = GeoFix::new(37.8, -122.4);
///
/// let mut engine = PursuitEngine::new();
/// engine.set_start_time(start);
/// engine.drop_pin(&mark);
///
/// let (state, events) = engine.step(start - 59_000, Some(&mark));
/// assert_eq!(events, vec![AlertEvent::Beep60]);
/// assert_eq!(state.delta_to_start_seconds, Some(59));
/// ```
#[derive(Clone, Debug)]
pub struct PursuitEngine {
    config: EngineConfig,
    latches: AlertLatches,
    state: EngineState,
    phase: RacePhase,
    attempt: u32,
    history: PhaseHistory<RacePhase>,
}

impl Default for PursuitEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PursuitEngine {
    /// Create an unarmed engine with the default timing policy.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom timing policy.
    ///
    /// The config is taken as-is; build it through
    /// [`EngineConfigBuilder`](super::EngineConfigBuilder) to have it validated.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            latches: AlertLatches::new(),
            state: EngineState::default(),
            phase: RacePhase::Unarmed,
            attempt: 0,
            history: PhaseHistory::new(),
        }
    }

    /// Record the target start instant.
    ///
    /// Clears `is_finished` and `message`. Latches that already fired stay
    /// fired unless the config has `rearm_resets_latches` set, in which
    /// case this behaves like [`rearm`](Self::rearm).
    pub fn set_start_time(&mut self, start_epoch_millis: i64) {
        if self.config.rearm_resets_latches {
            self.rearm(start_epoch_millis);
            return;
        }
        if self.attempt == 0 {
            self.attempt = 1;
        }
        self.apply_start_time(start_epoch_millis);
    }

    /// Start a new race attempt: clear every latch and set the start time.
    pub fn rearm(&mut self, start_epoch_millis: i64) {
        self.latches = AlertLatches::new();
        self.attempt += 1;
        debug!(attempt = self.attempt, "latches reset for new race attempt");
        self.apply_start_time(start_epoch_millis);
    }

    fn apply_start_time(&mut self, start_epoch_millis: i64) {
        self.state.start_time_epoch_millis = Some(start_epoch_millis);
        self.state.is_finished = false;
        self.state.message = None;
        debug!(start_epoch_millis, attempt = self.attempt, "start time set");
        self.sync_phase(self.state.now_epoch_millis);
    }

    /// Place the pin at the fix's coordinates, replacing any previous pin.
    pub fn drop_pin(&mut self, fix: &GeoFix) {
        let pin = PinLocation::from(fix);
        debug!(lat = pin.latitude, lon = pin.longitude, "pin dropped");
        self.state.pin = Some(pin);
    }

    /// Remove the pin.
    ///
    /// The snapshot keeps its last distance figures until the next
    /// [`step`](Self::step), which reports no distance, time-to-pin or
    /// guidance.
    pub fn clear_pin(&mut self) {
        debug!("pin cleared");
        self.state.pin = None;
    }

    /// Advance the engine to `now_epoch_millis` with the latest fix.
    ///
    /// Recomputes every derived field and returns the new snapshot together
    /// with the alerts that fired on this call, in firing order. Never fails:
    /// missing inputs show up as absent fields.
    pub fn step(
        &mut self,
        now_epoch_millis: i64,
        fix: Option<&GeoFix>,
    ) -> (EngineState, Vec<AlertEvent>) {
        let distance = match (self.state.pin.as_ref(), fix) {
            (Some(pin), Some(fix)) => Some(distance_to_pin(fix, pin)),
            _ => None,
        };
        let speed = fix.and_then(|f| f.speed_mps);
        let time_to_pin = match (distance, speed) {
            (Some(d), Some(s)) if s > self.config.motion_threshold_mps => Some(d / s),
            _ => None,
        };

        // Integer division truncates toward zero, so `delta == 0` spans
        // the open interval (start - 1000ms, start + 1000ms).
        let delta = self
            .state
            .start_time_epoch_millis
            .map(|start| start.saturating_sub(now_epoch_millis) / 1000);
        let guidance = match (delta, time_to_pin) {
            (Some(d), Some(t)) => Some(d as f64 - t),
            _ => None,
        };

        let events = match delta {
            Some(d) if self.phase.is_alerting() => self.latches.evaluate(d, &self.config),
            _ => Vec::new(),
        };
        for event in &events {
            info!(%event, delta_to_start = ?delta, "alert fired");
        }

        let state = &mut self.state;
        state.now_epoch_millis = now_epoch_millis;
        state.distance_meters = distance;
        state.speed_mps = speed;
        state.time_to_pin_seconds = time_to_pin;
        state.delta_to_start_seconds = delta;
        state.guidance_seconds = guidance;
        if events.contains(&AlertEvent::Finish) {
            state.is_finished = true;
        }

        trace!(
            now_epoch_millis,
            delta_to_start = ?delta,
            distance_m = ?distance,
            guidance_s = ?guidance,
            "step"
        );
        self.sync_phase(now_epoch_millis);

        (self.state.clone(), events)
    }

    fn sync_phase(&mut self, at_epoch_millis: i64) {
        let next = self.state.phase();
        if next == self.phase {
            return;
        }
        debug!(from = self.phase.name(), to = next.name(), "phase changed");
        self.history = self.history.record(PhaseTransition::at_millis(
            self.phase,
            next,
            at_epoch_millis,
            self.attempt,
        ));
        self.phase = next;
    }

    /// Latest snapshot without stepping.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Phase as of the last `step` or start-time change.
    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    /// Current race attempt, 0 until a start time is first set.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Every phase change so far, across all attempts.
    pub fn history(&self) -> &PhaseHistory<RacePhase> {
        &self.history
    }

    /// Fired-flags for the current attempt.
    pub fn latches(&self) -> &AlertLatches {
        &self.latches
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
