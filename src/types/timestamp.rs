//! Millisecond-resolution timestamps and their ISO-8601 text form.
//!
//! Every timestamp the crate creates is truncated to whole milliseconds so
//! that [`format`] and [`parse`] round-trip exactly. Years are capped at
//! 9999, the last year with a four-digit ISO-8601 form.

use chrono::{
    DateTime, Datelike, Duration, DurationRound, NaiveDate, NaiveDateTime, SecondsFormat, Utc,
};

use crate::types::errors::ValidationError;

/// Earliest year a stored timestamp may carry.
pub const MIN_YEAR: i32 = 0;
/// Latest year a stored timestamp may carry.
pub const MAX_YEAR: i32 = 9999;

/// Returns the current time truncated to milliseconds.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(Duration::milliseconds(1)).unwrap_or(now)
}

/// Returns a timestamp strictly after `previous`.
///
/// Uses the wall clock when it has moved past `previous`, otherwise bumps
/// `previous` by one millisecond. Fails when the result would leave the
/// four-digit year range.
pub fn advance(
    field: &'static str,
    previous: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let current = now();
    let next = if current > previous {
        current
    } else {
        previous + Duration::milliseconds(1)
    };
    if next.year() > MAX_YEAR {
        return Err(ValidationError::TimestampOverflow {
            field,
            value: format(&previous),
        });
    }
    Ok(next)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses the text forms accepted in stored records.
///
/// Accepts RFC 3339 with any offset, a naive date-time (read as UTC) and a
/// bare calendar date (midnight UTC). A value whose UTC year falls outside
/// 0000 to 9999 is rejected.
pub fn parse(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = value.trim();

    let parsed = if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        Some(parsed.with_timezone(&Utc))
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Some(naive.and_utc())
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    };

    match parsed {
        Some(timestamp) if (MIN_YEAR..=MAX_YEAR).contains(&timestamp.year()) => Ok(timestamp),
        _ => Err(ValidationError::InvalidTimestamp {
            field,
            value: value.to_string(),
        }),
    }
}
