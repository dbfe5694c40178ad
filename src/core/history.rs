//! Phase transition history.
//!
//! Every phase change of the engine is recorded as an immutable
//! [`PhaseTransition`]. Timestamps come from the caller's clock (the
//! `now` passed into `step`), never from the system clock.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Convert caller-supplied epoch millis into a UTC timestamp.
///
/// Values outside chrono's representable range saturate to its bounds.
pub fn timestamp_from_millis(epoch_millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_millis).unwrap_or(if epoch_millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use pursuit_start::core::{PhaseTransition, RacePhase};
///
/// let transition = PhaseTransition::at_millis(
///     RacePhase::Unarmed,
///     RacePhase::Countdown,
///     1_700_000_000_000,
///     1,
/// );
/// assert_eq!(transition.timestamp.timestamp_millis(), 1_700_000_000_000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
    /// Race attempt the change belongs to
    pub attempt: u32,
}

impl<S: State> PhaseTransition<S> {
    pub fn at_millis(from: S, to: S, epoch_millis: i64, attempt: u32) -> Self {
        Self {
            from,
            to,
            timestamp: timestamp_from_millis(epoch_millis),
            attempt,
        }
    }
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use pursuit_start::core::{PhaseHistory, PhaseTransition, RacePhase};
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition::at_millis(RacePhase::Unarmed, RacePhase::Countdown, 0, 1))
///     .record(PhaseTransition::at_millis(RacePhase::Countdown, RacePhase::Finished, 80_000, 1));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&RacePhase::Unarmed, &RacePhase::Countdown, &RacePhase::Finished]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    transitions: Vec<PhaseTransition<S>>,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when empty or when the caller's clock went backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Transitions belonging to one race attempt.
    pub fn for_attempt(&self, attempt: u32) -> impl Iterator<Item = &PhaseTransition<S>> + '_ {
        self.transitions
            .iter()
            .filter(move |t| t.attempt == attempt)
    }

    pub fn last(&self) -> Option<&PhaseTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[PhaseTransition<S>] {
        &self.transitions
    }
}
