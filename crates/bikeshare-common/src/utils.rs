//! Shared formatting helpers for console output.

use chrono::{NaiveDateTime, TimeDelta};

/// Line printed after each report section.
pub const SEPARATOR: &str = "----------------------------------------";

/// Formats a timestamp the way the source files store it.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats an hour of day as `HH:00hrs`.
pub fn format_hour(hour: u32) -> String {
    format!("{hour:02}:00hrs")
}

/// Renders a number of seconds as `<D> days HH:MM:SS[.ffffff]`.
///
/// Fractional seconds are kept to microsecond precision and only shown when
/// non-zero.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "NaT".to_string();
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let micros = (seconds.abs() * 1_000_000.0).round() as i64;
    let delta = TimeDelta::microseconds(micros);

    let days = delta.num_days();
    let hours = delta.num_hours() % 24;
    let minutes = delta.num_minutes() % 60;
    let secs = delta.num_seconds() % 60;
    let fraction = micros % 1_000_000;

    let mut formatted = format!("{sign}{days} days {hours:02}:{minutes:02}:{secs:02}");
    if fraction != 0 {
        formatted.push_str(&format!(".{fraction:06}"));
    }
    formatted
}
