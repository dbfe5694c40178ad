//! Pursuit Start: a regatta start-sequence engine.
//!
//! A sailor sets a target start time and drops a pin at the starting mark.
//! On every tick the driver feeds the engine the current time and the
//! latest GPS fix; the engine reports distance-to-pin, speed, time-to-pin
//! and an early/late guidance number, and fires one-shot alerts at T-60,
//! T-30, every second from T-10, at the gun and twenty seconds after it.
//!
//! The engine is a pure computation core: it never blocks, performs no
//! I/O and never reads a clock. Rendering, sensors and sounds belong to
//! the driver.
//!
//! # Modules
//!
//! - [`geo`]: fixes, pins, haversine distance and fix-quality tracking
//! - [`engine`]: the countdown/guidance state machine and its alerts
//! - [`core`]: race phases and their history
//! - [`schedule`]: turning typed `HH:MM:SS` into a start instant
//! - [`display`]: text formatting for metrics
//!
//! # Example
//!
//! ```rust
//! use pursuit_start::engine::{AlertEvent, PursuitEngine};
//! use pursuit_start::geo::GeoFix;
//!
//! let start = 1_700_000_000_000;
//! let mut engine = PursuitEngine::new();
//! engine.set_start_time(start);
//!
//! let fix = GeoFix::new(37.8, -122.4).with_speed(0.0);
//! engine.drop_pin(&fix);
//!
//! let (state, events) = engine.step(start - 65_000, Some(&fix));
//! assert!(events.is_empty());
//! assert_eq!(state.delta_to_start_seconds, Some(65));
//!
//! let (_, events) = engine.step(start, Some(&fix));
//! assert_eq!(events, vec![AlertEvent::Go]);
//! ```

pub mod core;
pub mod display;
pub mod engine;
pub mod geo;
pub mod schedule;

// Re-export commonly used types
pub use engine::{AlertEvent, EngineConfig, EngineState, PursuitEngine};
pub use geo::{distance_meters, GeoFix, PinLocation};
