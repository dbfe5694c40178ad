//! Text formatting for engine metrics.
//!
//! Helpers for drivers that render an
//! [`EngineState`](crate::engine::EngineState). Absent values render as
//! [`PLACEHOLDER`].

/// Shown in place of an absent value.
pub const PLACEHOLDER: &str = "—";

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// `+mm:ss` for non-negative seconds, `-mm:ss` otherwise.
///
/// ```rust
/// use pursuit_start::display::format_signed_mm_ss;
///
/// assert_eq!(format_signed_mm_ss(65), "+01:05");
/// assert_eq!(format_signed_mm_ss(-7), "-00:07");
/// ```
pub fn format_signed_mm_ss(seconds: i64) -> String {
    let sign = if seconds >= 0 { '+' } else { '-' };
    let abs = seconds.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// `mm:ss`, with negative values shown as `00:00`.
pub fn format_mm_ss(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// UTC time of day of an epoch-millis instant as `HH:MM:SS`.
pub fn format_hms_of_day(epoch_millis: i64) -> String {
    let total = epoch_millis.rem_euclid(DAY_MS) / 1000;
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Speed truncated to one decimal.
pub fn format_speed(mps: f64) -> String {
    format!("{:.1} m/s", (mps * 10.0).trunc() / 10.0)
}

/// Distance truncated to whole meters.
pub fn format_distance(meters: f64) -> String {
    format!("{} m", meters.trunc() as i64)
}

pub fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
