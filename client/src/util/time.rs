//! Timestamp display helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format `ts` as a wall-clock time in the viewer's local zone.
#[must_use]
pub fn local_time_label(ts: DateTime<Utc>) -> String {
    time_label_in(ts, &Local)
}

/// Format `ts` as `HH:MM` in the given zone.
pub fn time_label_in<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}
