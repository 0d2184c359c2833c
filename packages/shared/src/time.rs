use chrono::{DateTime, SecondsFormat, Utc};

/// Get the current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a millisecond Unix timestamp as an RFC 3339 string.
///
/// Out of range values fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a millisecond Unix timestamp as a local `HH:MM:SS` clock string.
pub fn timestamp_to_clock(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string()
}
