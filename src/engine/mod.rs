//! Countdown and guidance engine.
//!
//! The driver calls [`PursuitEngine::step`] on every tick with the current
//! time and the latest GPS fix. The engine recomputes distance-to-pin,
//! time-to-pin, delta-to-start and guidance, and returns the alerts that
//! became due on that call.
//!
//! # Alert policy
//!
//! With the default [`EngineConfig`]:
//!
//! | alert | fires when `delta` (whole seconds) | how often |
//! |---|---|---|
//! | `BEEP_60` | `30 < delta <= 60` | once per attempt |
//! | `BEEP_30` | `10 < delta <= 30` | once per attempt |
//! | `COUNTDOWN_BEEP` | `1 <= delta <= 10` | once per distinct second |
//! | `GO` | `delta == 0` | once per attempt |
//! | `FINISH` | `delta <= -20` | once per attempt, ends alerting |

mod alert;
mod config;
mod error;
mod machine;
mod snapshot;

pub use alert::{AlertEvent, AlertLatches};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{ConfigError, ConfigViolation};
pub use machine::PursuitEngine;
pub use snapshot::EngineState;
