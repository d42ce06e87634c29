use chrono::{DateTime, Utc};

/// ISO-8601 UTC with millisecond precision, e.g. `2024-03-01T12:00:00.250Z`.
///
/// Values outside chrono's range fall back to the raw number.
pub fn format_epoch_millis(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        None => ms.to_string(),
    }
}

/// Second precision, used in summary banners.
pub fn format_banner_time(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        None => ms.to_string(),
    }
}
