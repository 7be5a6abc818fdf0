use chrono::{DateTime, Utc};

/// Formats a UTC instant as the day key used by the daily activity rows.
pub fn day_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Formats an instant as a Discord relative timestamp, e.g. `<t:1700000000:R>`.
pub fn discord_relative(at: DateTime<Utc>) -> String {
    format!("<t:{}:R>", at.timestamp())
}

/// Formats an optional end time, rendering `None` as permanent.
pub fn discord_until(end_time: Option<DateTime<Utc>>) -> String {
    match end_time {
        Some(end) => discord_relative(end),
        None => "Permanent".to_string(),
    }
}
