//! Start-time entry.
//!
//! Turns what the sailor types into an epoch-millis start instant: digits
//! are formatted progressively as `HH:MM:SS`, parsed as a 24h time of day,
//! and resolved against "now" with a next-day rollover when the time has
//! already passed. The caller supplies `now`; nothing here reads a clock.

mod error;

pub use error::{FieldViolation, ScheduleError};

use chrono::{DateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const ENTRY_DIGITS: usize = 6;
/// Resolved starts further away than this are labelled "Tomorrow" in previews.
const PREVIEW_TOMORROW_HOURS: f64 = 20.0;

/// Keep the first six digits of `input` and format them as `HH:MM:SS`
/// progressively.
///
/// ```rust
/// use pursuit_start::schedule::format_entry_digits;
///
/// assert_eq!(format_entry_digits("0"), "0");
/// assert_eq!(format_entry_digits("010"), "01:0");
/// assert_eq!(format_entry_digits("08:32:5"), "08:32:5");
/// assert_eq!(format_entry_digits("0832569"), "08:32:56");
/// ```
pub fn format_entry_digits(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(ENTRY_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}:{}", &digits[..2], &digits[2..]),
        _ => format!("{}:{}:{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// A validated 24h wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn to_naive(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

fn range_check(ok: bool, violation: FieldViolation) -> Validation<(), NonEmptyVec<FieldViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Parse `HH:MM:SS`. Every out-of-range field is reported.
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay, ScheduleError> {
    let malformed = || ScheduleError::Malformed(input.to_string());

    let fields = input
        .trim()
        .split(':')
        .map(|part| part.parse::<u32>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;
    let [hour, minute, second] = fields[..] else {
        return Err(malformed());
    };

    let checks = vec![
        range_check(hour <= 23, FieldViolation::Hour(hour)),
        range_check(minute <= 59, FieldViolation::Minute(minute)),
        range_check(second <= 59, FieldViolation::Second(second)),
    ];
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(TimeOfDay {
            hour,
            minute,
            second,
        }),
        Validation::Failure(violations) => Err(ScheduleError::OutOfRange(
            violations.iter().copied().collect(),
        )),
    }
}

/// Resolve a time of day to epoch millis on `now`'s local date.
///
/// If that instant is not after `now`, the start is taken to be the same
/// time tomorrow (24 hours later). Ambiguous local times resolve to the
/// earliest instant.
pub fn resolve_start_time<Tz: TimeZone>(
    time: TimeOfDay,
    now: &DateTime<Tz>,
) -> Result<i64, ScheduleError> {
    let naive_time = time
        .to_naive()
        .ok_or_else(|| ScheduleError::Malformed(time.to_string()))?;
    let local = now.date_naive().and_time(naive_time);
    let start = now
        .timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| ScheduleError::NonexistentLocalTime(local.to_string()))?;

    let mut start_millis = start.timestamp_millis();
    let now_millis = now.timestamp_millis();
    if start_millis <= now_millis {
        start_millis += DAY_MS;
    }
    tracing::debug!(%time, start_millis, now_millis, "resolved start time");
    Ok(start_millis)
}

/// Parse and resolve in one go.
pub fn parse_start_time<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Result<i64, ScheduleError> {
    resolve_start_time(parse_time_of_day(input)?, now)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayLabel {
    Today,
    Tomorrow,
}

impl DayLabel {
    /// Classify a start instant relative to `now`.
    ///
    /// Past starts and starts a day or more away are `Tomorrow`. Otherwise
    /// the UTC time of day decides: a start whose time of day is not
    /// earlier than now's is `Today`.
    pub fn classify(now_epoch_millis: i64, start_epoch_millis: i64) -> Self {
        let delta = start_epoch_millis.saturating_sub(now_epoch_millis);
        if !(0..DAY_MS).contains(&delta) {
            return Self::Tomorrow;
        }
        let now_tod = now_epoch_millis.rem_euclid(DAY_MS);
        let start_tod = start_epoch_millis.rem_euclid(DAY_MS);
        if start_tod >= now_tod {
            Self::Today
        } else {
            Self::Tomorrow
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
        }
    }
}

/// `"Scheduled: Today 08:32:56"` for a complete entry, `None` otherwise.
pub fn preview_label<Tz: TimeZone>(formatted: &str, now: &DateTime<Tz>) -> Option<String> {
    if formatted.len() != 8 {
        return None;
    }
    let start_millis = parse_start_time(formatted, now).ok()?;
    let delta_hours = (start_millis - now.timestamp_millis()) as f64 / 3_600_000.0;
    let label = if delta_hours > PREVIEW_TOMORROW_HOURS {
        DayLabel::Tomorrow
    } else {
        DayLabel::Today
    };
    Some(format!("Scheduled: {label} {formatted}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use chrono_tz::America::Los_Angeles;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn progressive_formatting() {
        assert_eq!(format_entry_digits(""), "");
        assert_eq!(format_entry_digits("01"), "01");
        assert_eq!(format_entry_digits("0101"), "01:01");
        assert_eq!(format_entry_digits("01010"), "01:01:0");
        assert_eq!(format_entry_digits("010101"), "01:01:01");
        assert_eq!(format_entry_digits("ab1c2:3"), "12:3");
    }

    #[test]
    fn parses_valid_time() {
        let time = parse_time_of_day(" 08:32:56 ").unwrap();
        assert_eq!(
            time,
            TimeOfDay {
                hour: 8,
                minute: 32,
                second: 56
            }
        );
        assert_eq!(time.to_string(), "08:32:56");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "08:32", "08:32:56:00", "aa:bb:cc", "08::56", "-1:00:00"] {
            assert!(
                matches!(parse_time_of_day(input), Err(ScheduleError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn reports_every_out_of_range_field() {
        let err = parse_time_of_day("24:60:61").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange(vec![
                FieldViolation::Hour(24),
                FieldViolation::Minute(60),
                FieldViolation::Second(61),
            ])
        );
        assert!(err.to_string().contains("hour 24"));
    }

    #[test]
    fn future_time_resolves_to_today() {
        let now = utc(8, 0, 0);
        let start = parse_start_time("08:32:56", &now).unwrap();
        assert_eq!(start, utc(8, 32, 56).timestamp_millis());
    }

    #[test]
    fn past_or_current_time_rolls_over_to_tomorrow() {
        let now = utc(8, 0, 0);
        let start = parse_start_time("07:59:59", &now).unwrap();
        assert_eq!(start, utc(7, 59, 59).timestamp_millis() + DAY_MS);

        let same = parse_start_time("08:00:00", &now).unwrap();
        assert_eq!(same, now.timestamp_millis() + DAY_MS);
    }

    #[test]
    fn resolves_in_callers_time_zone() {
        let tz = FixedOffset::east_opt(-7 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        let start = parse_start_time("09:00:00", &now).unwrap();
        assert_eq!(start, utc(16, 0, 0).timestamp_millis());
    }

    #[test]
    fn nonexistent_local_time_is_rejected() {
        // Clocks jump from 02:00 to 03:00 on 2026-03-08 in Los Angeles.
        let now = Los_Angeles.with_ymd_and_hms(2026, 3, 8, 0, 10, 0).unwrap();
        assert!(matches!(
            parse_start_time("02:30:00", &now),
            Err(ScheduleError::NonexistentLocalTime(_))
        ));
    }

    #[test]
    fn ambiguous_local_time_resolves_to_earliest() {
        // 01:00-02:00 happens twice on 2026-11-01 in Los Angeles.
        let now = Los_Angeles.with_ymd_and_hms(2026, 11, 1, 0, 10, 0).unwrap();
        let start = parse_start_time("01:30:00", &now).unwrap();

        let local = NaiveDate::from_ymd_opt(2026, 11, 1)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let earliest = Los_Angeles.from_local_datetime(&local).earliest().unwrap();
        assert_eq!(start, earliest.timestamp_millis());
        // 01:30 PDT, before the clocks fall back.
        assert_eq!(
            start,
            Utc.with_ymd_and_hms(2026, 11, 1, 8, 30, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn classify_day_label() {
        let now = utc(8, 0, 0).timestamp_millis();
        assert_eq!(DayLabel::classify(now, now + 60_000), DayLabel::Today);
        assert_eq!(DayLabel::classify(now, now), DayLabel::Today);
        assert_eq!(DayLabel::classify(now, now - 1), DayLabel::Tomorrow);
        assert_eq!(DayLabel::classify(now, now + DAY_MS), DayLabel::Tomorrow);
        // 07:00 UTC tomorrow is within 24h but earlier in the day.
        assert_eq!(
            DayLabel::classify(now, now + 23 * 3_600_000),
            DayLabel::Tomorrow
        );
    }

    #[test]
    fn preview_label_for_complete_entries_only() {
        let now = utc(8, 0, 0);
        assert_eq!(
            preview_label("09:00:00", &now).as_deref(),
            Some("Scheduled: Today 09:00:00")
        );
        assert_eq!(
            preview_label("07:00:00", &now).as_deref(),
            Some("Scheduled: Tomorrow 07:00:00")
        );
        assert!(preview_label("09:00", &now).is_none());
        assert!(preview_label("29:00:00", &now).is_none());
    }
}
