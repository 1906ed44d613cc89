//! Time utilities: task timestamps, live clock, report dates.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a task `created_at` value into the given time zone.
///
/// Timestamps with an offset are converted; timestamps without one are taken
/// to be wall-clock time in `tz` already.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Time-of-day of a task, e.g. `"9:05:12 AM"`.
/// Unparseable input is returned unchanged.
pub fn format_task_time<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw, tz) {
        Some(dt) => dt.format("%-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

/// Live clock shown in the dashboard header, e.g. `"02:07:45 PM"`.
pub fn format_clock<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%I:%M:%S %p").to_string()
}

/// Long header date, e.g. `"Monday, October 19, 2026"`.
pub fn format_long_date<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y").to_string()
}

/// Calendar date (UTC) embedded in report file names.
pub fn report_date(fetched_at: &DateTime<Utc>) -> String {
    fetched_at.format("%Y-%m-%d").to_string()
}
