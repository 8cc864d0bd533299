//! Calendar fields derived from trip start timestamps.
//!
//! Everything here is a pure function of a timestamp; derived values are
//! never stored on the dataset.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

/// Accepted layouts for `Start Time` / `End Time` cells.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a trip timestamp, trying each known layout in turn.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Month of year, 1-12.
pub fn month_of(ts: &NaiveDateTime) -> u32 {
    ts.month()
}

/// Hour of day, 0-23.
pub fn hour_of(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}

pub fn weekday_of(ts: &NaiveDateTime) -> Weekday {
    ts.weekday()
}

/// Full English weekday name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Renders a number of seconds as `"[N days, ]HH:MM:SS"`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "n/a".to_string();
    }
    let total = seconds.round() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    match days {
        0 => format!("{hours:02}:{minutes:02}:{secs:02}"),
        1 => format!("1 day, {hours:02}:{minutes:02}:{secs:02}"),
        _ => format!("{days} days, {hours:02}:{minutes:02}:{secs:02}"),
    }
}
