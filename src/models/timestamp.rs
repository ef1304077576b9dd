use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Parse a record timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`) and naive ISO 8601 without an
/// offset (`2024-03-01T10:00:00.123456`), which is read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    text.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for `created_at` fields
pub(crate) fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_timestamp(&text).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid created_at '{}': expected an RFC 3339 or ISO 8601 date-time",
            text
        ))
    })
}
