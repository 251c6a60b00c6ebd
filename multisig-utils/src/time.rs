use chrono::{DateTime, Duration, Utc};

// utc now datetime
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Epoch seconds to a calendar timestamp.
pub fn timestamp_to_datetime(secs: i64) -> Result<DateTime<Utc>, crate::Error> {
    DateTime::from_timestamp(secs, 0)
        .ok_or(crate::ParseError::TimestampOutOfRange(secs).into())
}

pub fn timestamp_with_nanos_to_datetime(
    secs: i64,
    nanos: u32,
) -> Result<DateTime<Utc>, crate::Error> {
    DateTime::from_timestamp(secs, nanos)
        .ok_or(crate::ParseError::TimestampOutOfRange(secs).into())
}

pub fn elapsed_since(earlier: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(earlier)
}
