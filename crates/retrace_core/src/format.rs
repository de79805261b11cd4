use chrono::{DateTime, TimeZone};

use crate::types::Second;

/// Renders a timestamp as `"5 Jun 2023 14:30"`: day, abbreviated English
/// month, year, then 24-hour time. No seconds, no comma, no timezone
/// conversion; the wall clock is shown as stored.
pub fn format_dt<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.naive_local().format("%-d %b %Y %H:%M").to_string()
}

/// Renders a whole-second duration the way the sidebar shows it: seconds
/// below one minute, otherwise hours and minutes with the sub-minute
/// remainder dropped. The minutes token is always present past one minute,
/// even when zero.
pub fn format_duration(seconds: Second) -> String {
    if seconds < 60 {
        return format!("{seconds} seconds");
    }
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let minutes = minutes % 60;
    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours} hours"));
    }
    parts.push(format!("{minutes} minutes"));
    parts.join(" ")
}
