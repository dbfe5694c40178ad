//! Simulated Pursuit Start
//!
//! Drives the engine the way a phone UI would: a 200 ms tick, a boat
//! reaching toward the pin at a steady speed, and alerts dispatched as
//! they fire. Time is synthetic so the run finishes instantly.
//!
//! Run with: cargo run --example simulated_start
//! More detail: RUST_LOG=pursuit_start=debug cargo run --example simulated_start

use chrono::Utc;
use pursuit_start::display::{
    format_distance, format_hms_of_day, format_mm_ss, format_signed_mm_ss, format_speed,
    or_placeholder,
};
use pursuit_start::engine::{AlertEvent, PursuitEngine};
use pursuit_start::geo::{FixQualityTracker, GeoFix};
use pursuit_start::schedule::{format_entry_digits, parse_start_time, DayLabel};
use tracing_subscriber::EnvFilter;

const TICK_MS: i64 = 200;
const BOAT_SPEED_MPS: f64 = 3.0;
// Roughly meters per degree of latitude.
const M_PER_DEG_LAT: f64 = 111_195.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Pursuit Start Simulation ===\n");

    // Start at 12:02:00 UTC, two minutes after the simulated "now".
    let now = Utc::now()
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);
    let typed = format_entry_digits("120200");
    let start = match parse_start_time(&typed, &now) {
        Ok(start) => start,
        Err(e) => {
            eprintln!("Could not schedule start: {e}");
            return;
        }
    };
    let label = DayLabel::classify(now.timestamp_millis(), start);
    println!("Scheduled: {label} {}\n", format_hms_of_day(start));

    let mut engine = PursuitEngine::new();
    engine.set_start_time(start);

    let pin = GeoFix::new(37.8, -122.4).with_accuracy(3.0);
    let mut quality = FixQualityTracker::new();
    for _ in 0..3 {
        quality.observe(Some(&pin));
    }
    if quality.pin_drop_ready() {
        engine.drop_pin(&pin);
        println!("Pin dropped at {:.5}, {:.5}", pin.latitude, pin.longitude);
    }

    // Boat starts 400 m south of the pin and sails north.
    let mut boat_lat = pin.latitude - 400.0 / M_PER_DEG_LAT;
    let mut clock = now.timestamp_millis();
    loop {
        let fix = GeoFix::new(boat_lat, pin.longitude)
            .with_speed(BOAT_SPEED_MPS)
            .with_accuracy(4.0)
            .with_provider("sim");
        let (state, events) = engine.step(clock, Some(&fix));

        for event in &events {
            let delta = state.delta_to_start_seconds.map(format_signed_mm_ss);
            println!(
                "[{}] {:<14} distance {:>6}  speed {}  time-to-pin {}  early/late {}",
                or_placeholder(delta),
                event.name(),
                or_placeholder(state.distance_meters.map(format_distance)),
                or_placeholder(state.speed_mps.map(format_speed)),
                or_placeholder(state.time_to_pin_seconds.map(|t| format_mm_ss(t as i64))),
                or_placeholder(state.guidance_seconds.map(|g| format_signed_mm_ss(g as i64))),
            );
        }

        if events.contains(&AlertEvent::Finish) {
            break;
        }

        clock += TICK_MS;
        boat_lat += BOAT_SPEED_MPS * (TICK_MS as f64 / 1000.0) / M_PER_DEG_LAT;
    }

    println!("\nPhases:");
    for transition in engine.history().transitions() {
        println!(
            "  {:?} -> {:?} at {}",
            transition.from,
            transition.to,
            transition.timestamp.format("%H:%M:%S")
        );
    }

    println!("\n=== Simulation Complete ===");
}
