use chrono::DateTime;
use chrono_tz::Tz;

/// Render a unix timestamp the way alerts display it, e.g. `1/1/2024, 8:00:00 AM`.
/// Timestamps outside chrono's range fall back to the raw number.
pub fn format_timestamp(timestamp: i64, timezone: Tz) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(&timezone).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => timestamp.to_string(),
    }
}
