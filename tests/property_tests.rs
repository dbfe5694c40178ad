//! Property-based tests for distance math and the start-sequence engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use pursuit_start::core::RacePhase;
use pursuit_start::engine::{AlertEvent, PursuitEngine};
use pursuit_start::geo::{distance_meters, GeoFix, EARTH_RADIUS_M};

const T: i64 = 1_700_000_000_000;

prop_compose! {
    fn arbitrary_coord()(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) -> (f64, f64) {
        (lat, lon)
    }
}

prop_compose! {
    fn arbitrary_fix()(
        (lat, lon) in arbitrary_coord(),
        speed in prop::option::of(0.0f64..15.0),
    ) -> GeoFix {
        let fix = GeoFix::new(lat, lon);
        match speed {
            Some(s) => fix.with_speed(s),
            None => fix,
        }
    }
}

/// Monotonic `now` values from two minutes before the start to a minute after,
/// with irregular gaps.
fn forward_clock() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..3_000, 1..200).prop_map(|gaps| {
        let mut now = T - 120_000;
        gaps.into_iter()
            .map(|gap| {
                now += gap;
                now
            })
            .collect()
    })
}

fn count(events: &[AlertEvent], event: AlertEvent) -> usize {
    events.iter().filter(|e| **e == event).count()
}

proptest! {
    #[test]
    fn distance_is_symmetric((a_lat, a_lon) in arbitrary_coord(), (b_lat, b_lon) in arbitrary_coord()) {
        let ab = distance_meters(a_lat, a_lon, b_lat, b_lon);
        let ba = distance_meters(b_lat, b_lon, a_lat, a_lon);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn distance_to_self_is_zero((lat, lon) in arbitrary_coord()) {
        prop_assert_eq!(distance_meters(lat, lon, lat, lon), 0.0);
    }

    #[test]
    fn distance_is_finite_and_bounded((a_lat, a_lon) in arbitrary_coord(), (b_lat, b_lon) in arbitrary_coord()) {
        let d = distance_meters(a_lat, a_lon, b_lat, b_lon);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
    }

    #[test]
    fn one_shot_alerts_never_repeat(clock in forward_clock()) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);

        let mut all = Vec::new();
        for now in clock {
            let (_, events) = engine.step(now, None);
            all.extend(events);
        }

        prop_assert!(count(&all, AlertEvent::Beep60) <= 1);
        prop_assert!(count(&all, AlertEvent::Beep30) <= 1);
        prop_assert!(count(&all, AlertEvent::Go) <= 1);
        prop_assert!(count(&all, AlertEvent::Finish) <= 1);
        prop_assert!(count(&all, AlertEvent::CountdownBeep) <= 10);
    }

    #[test]
    fn countdown_beeps_once_per_visited_second(clock in forward_clock()) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);

        let mut visited = std::collections::BTreeSet::new();
        let mut beeps = 0;
        for now in clock {
            let (state, events) = engine.step(now, None);
            if let Some(delta) = state.delta_to_start_seconds {
                if (1..=10).contains(&delta) {
                    visited.insert(delta);
                }
            }
            beeps += count(&events, AlertEvent::CountdownBeep);
        }

        prop_assert_eq!(beeps, visited.len());
    }

    #[test]
    fn latches_survive_a_new_start_time(offset_secs in 31i64..=60) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);
        let (_, events) = engine.step(T - 45_000, None);
        prop_assert_eq!(events, vec![AlertEvent::Beep60]);

        // Move the start so delta re-enters (30, 60].
        engine.set_start_time(T + 1_000_000);
        let (state, events) = engine.step(T + 1_000_000 - offset_secs * 1000, None);
        prop_assert_eq!(state.delta_to_start_seconds, Some(offset_secs));
        prop_assert!(!events.contains(&AlertEvent::Beep60));
    }

    #[test]
    fn finished_stays_finished(clock in forward_clock(), extra in 20_000i64..3_600_000) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);
        for now in clock {
            engine.step(now, None);
        }
        let (state, _) = engine.step(T + extra, None);
        prop_assert!(state.is_finished);

        let (state, events) = engine.step(T + extra + 1_000, None);
        prop_assert!(state.is_finished);
        prop_assert!(events.is_empty());
        prop_assert_eq!(engine.phase(), RacePhase::Finished);
    }

    #[test]
    fn no_pin_means_no_distance(fix in prop::option::of(arbitrary_fix()), now in (T - 600_000)..(T + 60_000)) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);

        let (state, _) = engine.step(now, fix.as_ref());
        prop_assert!(state.distance_meters.is_none());
        prop_assert!(state.time_to_pin_seconds.is_none());
        prop_assert!(state.guidance_seconds.is_none());
        prop_assert!(state.delta_to_start_seconds.is_some());
    }

    #[test]
    fn no_start_time_means_no_delta(pin in arbitrary_fix(), fix in arbitrary_fix(), now in any::<i64>()) {
        let mut engine = PursuitEngine::new();
        engine.drop_pin(&pin);

        let (state, events) = engine.step(now, Some(&fix));
        prop_assert!(events.is_empty());
        prop_assert!(state.delta_to_start_seconds.is_none());
        prop_assert!(state.guidance_seconds.is_none());
        prop_assert!(state.distance_meters.is_some());
    }

    #[test]
    fn delta_truncates_toward_zero(offset in -10_000_000i64..10_000_000) {
        let mut engine = PursuitEngine::new();
        engine.set_start_time(T);
        let (state, _) = engine.step(T - offset, None);

        let delta = state.delta_to_start_seconds.unwrap();
        prop_assert_eq!(delta, offset / 1000);
        prop_assert!(delta.abs() * 1000 <= offset.abs());
    }
}
