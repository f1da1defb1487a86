//! Turning caller-supplied dates into validated UTC timestamps.
use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A date as received: either already a timestamp or free text still to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    At(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(v: DateTime<Utc>) -> Self { DateInput::At(v) }
}

impl From<&str> for DateInput {
    fn from(v: &str) -> Self { DateInput::Text(v.to_string()) }
}

impl From<String> for DateInput {
    fn from(v: String) -> Self { DateInput::Text(v) }
}

/// Timestamps are kept at microsecond precision, the resolution of `timestamptz`.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Current time at stored precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(STORED_SUBSEC_DIGITS)
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Resolve `input` to a point in time, failing with `InvalidArgument` naming `field`.
///
/// Accepts RFC 3339, naive date-times (read as UTC) and bare `YYYY-MM-DD` dates
/// (midnight UTC).
pub fn parse_date(input: &DateInput, field: &str) -> Result<DateTime<Utc>, ServiceError> {
    let parsed = match input {
        DateInput::At(v) => *v,
        DateInput::Text(raw) => parse_text(raw.trim())
            .ok_or_else(|| ServiceError::invalid(format!("Invalid date value for {}.", field)))?,
    };
    Ok(parsed.trunc_subsecs(STORED_SUBSEC_DIGITS))
}

fn parse_text(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(v) = DateTime::parse_from_rfc3339(raw) {
        return Some(v.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(v) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(v.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|v| v.and_utc())
}

/// Parse when present; `None` keeps whatever the caller already has.
pub fn parse_optional(input: Option<&DateInput>, field: &str) -> Result<Option<DateTime<Utc>>, ServiceError> {
    input.map(|v| parse_date(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_rfc3339_with_offset() {
        let v = parse_date(&"2024-05-01T20:00:00+02:00".into(), "paidAt").unwrap();
        assert_eq!(v, Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap());
    }

    #[test]
    fn accepts_bare_date_as_midnight_utc() {
        let v = parse_date(&"2024-12-24".into(), "reservationDate").unwrap();
        assert_eq!(v, Utc.with_ymd_and_hms(2024, 12, 24, 0, 0, 0).unwrap());
    }

    #[test]
    fn accepts_naive_datetime() {
        let v = parse_date(&"2024-12-24T19:30:00".into(), "startsOn").unwrap();
        assert_eq!(v, Utc.with_ymd_and_hms(2024, 12, 24, 19, 30, 0).unwrap());
    }

    #[test]
    fn passes_timestamps_through() {
        let now = now();
        assert_eq!(parse_date(&now.into(), "createdAt").unwrap(), now);
    }

    #[test]
    fn sub_microsecond_digits_are_dropped() {
        let v = parse_date(&"2024-05-01T10:00:00.123456789Z".into(), "paidAt").unwrap();
        assert_eq!(v.timestamp_subsec_nanos(), 123_456_000);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap() + chrono::Duration::nanoseconds(999);
        assert_eq!(parse_date(&at.into(), "paidAt").unwrap().timestamp_subsec_nanos(), 0);
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn rejects_garbage_naming_field() {
        let err = parse_date(&"not-a-date".into(), "endsOn").unwrap_err();
        assert_eq!(err, ServiceError::InvalidArgument("Invalid date value for endsOn.".into()));
        assert!(parse_date(&"".into(), "endsOn").is_err());
        assert!(parse_date(&"2024-02-30".into(), "endsOn").is_err());
    }

    #[test]
    fn untagged_decoding_prefers_timestamps() {
        let v: DateInput = serde_json::from_str("\"2024-05-01T10:00:00Z\"").unwrap();
        assert!(matches!(v, DateInput::At(_)));
        let v: DateInput = serde_json::from_str("\"2024-05-01\"").unwrap();
        assert!(matches!(v, DateInput::Text(_)));
    }
}
