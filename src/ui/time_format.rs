use chrono::{DateTime, TimeZone, Utc};
use chrono_humanize::HumanTime;

/// Clock label used on chat bubbles, e.g. "14:05".
pub fn clock_label<Tz: TimeZone>(dt: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// How long ago a squad was formed, e.g. "5 minutes ago".
/// Falls back to the raw value when it is not an RFC 3339 timestamp.
pub fn formed_ago(created_at: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => {
            let elapsed = dt.with_timezone(&Utc) - now;
            HumanTime::from(elapsed).to_string()
        }
        Err(_) => created_at.to_string(),
    }
}
