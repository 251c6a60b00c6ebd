use chrono::{DateTime, Utc};

/// Document-store representation of an instant.
///
/// Every conversion between the persisted form and `DateTime<Utc>` goes
/// through [`StoredTimestamp::from_datetime`] and [`StoredTimestamp::into_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredTimestamp {
    #[serde(rename = "_seconds")]
    pub seconds: i64,
    #[serde(rename = "_nanoseconds", default)]
    pub nanoseconds: u32,
}

impl StoredTimestamp {
    pub fn from_datetime(value: &DateTime<Utc>) -> Self {
        Self {
            seconds: value.timestamp(),
            nanoseconds: value.timestamp_subsec_nanos(),
        }
    }

    pub fn into_datetime(self) -> Result<DateTime<Utc>, multisig_utils::Error> {
        multisig_utils::time::timestamp_with_nanos_to_datetime(self.seconds, self.nanoseconds)
    }
}
