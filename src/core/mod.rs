//! Phase types shared by the engine.
//!
//! - Phase definitions via the `State` trait and `RacePhase`
//! - Immutable phase history stamped with caller-supplied time
//!
//! Everything here is pure.

mod history;
mod state;

pub use history::{timestamp_from_millis, PhaseHistory, PhaseTransition};
pub use state::{RacePhase, State};
