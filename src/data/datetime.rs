use chrono::{DateTime, TimeDelta, Utc};

/// Seconds from `start` to `end`, negative when `end` comes first.
/// Keeps microsecond precision.
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    }
}

/// Format elapsed seconds as `m:ss.cc` for time-axis labels.
///
/// Minutes wrap at the hour, matching the logger's own time labels; flights
/// are far shorter than that.
pub fn format_elapsed(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::new();
    }
    let millis = (seconds.abs() * 1000.0).round() as i64;
    let delta = TimeDelta::try_milliseconds(millis).unwrap_or_default();
    let total_ms = delta.num_milliseconds();
    let sign = if seconds < 0.0 && total_ms > 0 { "-" } else { "" };
    let minutes = delta.num_minutes() % 60;
    let secs = delta.num_seconds() % 60;
    let centis = (total_ms % 1000) / 10;
    format!("{sign}{minutes}:{secs:02}.{centis:02}")
}
