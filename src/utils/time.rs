//! Time utilities for timeline bucketing
//!
//! Timestamps are carried as epoch milliseconds throughout the crate. These
//! helpers convert between that representation and the ISO 8601 strings used
//! by release and flag payloads.

use crate::errors::{BucketError, BucketResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Epoch milliseconds (UTC)
pub type EpochMillis = i64;

/// Milliseconds in a second
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Naive datetime layouts accepted when no UTC offset is present
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Convert epoch milliseconds to an RFC 3339 string with millisecond precision
///
/// Values chrono cannot represent are rendered as the raw millisecond count.
///
/// # Examples
/// ```
/// use release_buckets::utils::time::millis_to_iso;
/// assert_eq!(millis_to_iso(0), "1970-01-01T00:00:00.000Z");
/// assert_eq!(millis_to_iso(1704067200123), "2024-01-01T00:00:00.123Z");
/// ```
pub fn millis_to_iso(millis: EpochMillis) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| millis.to_string())
}

/// Reject epoch milliseconds outside the range chrono can represent
pub fn checked_millis(millis: EpochMillis) -> BucketResult<EpochMillis> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|_| millis)
        .ok_or_else(|| BucketError::InvalidTimestamp {
            value: millis.to_string(),
        })
}

/// Parse an ISO 8601 / RFC 3339 timestamp into epoch milliseconds
///
/// Accepts, in order:
/// - RFC 3339 with offset (`2024-01-01T12:00:00+02:00`, `...Z`)
/// - naive datetimes, taken as UTC (`2024-01-01T12:00:00`, `2024-01-01 12:00:00.5`)
/// - bare dates, taken as UTC midnight (`2024-01-01`)
/// - integer epoch milliseconds (`1704067200000`)
///
/// # Examples
/// ```
/// use release_buckets::utils::time::parse_timestamp;
/// assert_eq!(parse_timestamp("2024-01-01T00:00:00Z").unwrap(), 1704067200000);
/// assert_eq!(parse_timestamp("2024-01-01").unwrap(), 1704067200000);
/// ```
pub fn parse_timestamp(value: &str) -> BucketResult<EpochMillis> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    match trimmed.parse::<EpochMillis>() {
        Ok(millis) => checked_millis(millis),
        Err(_) => Err(BucketError::InvalidTimestamp {
            value: value.to_string(),
        }),
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

/// Human-readable width of a bucket (e.g. "1.223s", "2h 5m")
pub fn format_duration_millis(millis: i64) -> String {
    let millis = millis.max(0);
    if millis < 60 * MILLIS_PER_SECOND {
        return format!("{:.3}s", millis as f64 / MILLIS_PER_SECOND as f64);
    }

    let total_minutes = millis / (60 * MILLIS_PER_SECOND);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
