//! Phase trait and the race phases of a start sequence.
//!
//! The engine derives its phase after every operation. Phases are plain
//! values: they carry no data and are only used for inspection, logging
//! and the phase history.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure. Implementors are small immutable values that
/// describe where a state machine currently is.
///
/// # Example
///
/// ```rust
/// use pursuit_start::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Leg {
///     Upwind,
///     Downwind,
///     Finished,
/// }
///
/// impl State for Leg {
///     fn name(&self) -> &str {
///         match self {
///             Self::Upwind => "Upwind",
///             Self::Downwind => "Downwind",
///             Self::Finished => "Finished",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Finished)
///     }
/// }
///
/// assert!(Leg::Finished.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Phase of a single race attempt.
///
/// - `Unarmed`: no start time has been set.
/// - `Countdown`: a start time is set and the finish alert has not fired.
/// - `Finished`: the finish alert fired. Terminal for alerting; distance
///   and speed keep being recomputed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RacePhase {
    #[default]
    Unarmed,
    Countdown,
    Finished,
}

impl RacePhase {
    /// Derive the phase from the two facts that define it.
    pub fn derive(start_time_set: bool, finished: bool) -> Self {
        match (start_time_set, finished) {
            (false, _) => Self::Unarmed,
            (true, false) => Self::Countdown,
            (true, true) => Self::Finished,
        }
    }

    /// Whether alerts are still evaluated in this phase.
    pub fn is_alerting(&self) -> bool {
        matches!(self, Self::Countdown)
    }
}

impl State for RacePhase {
    fn name(&self) -> &str {
        match self {
            Self::Unarmed => "Unarmed",
            Self::Countdown => "Countdown",
            Self::Finished => "Finished",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}
