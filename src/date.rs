//! CakeMail date wire format.
//!
//! Dates travel as `YYYY-MM-DD HH:MM:SS` without a zone marker, at one second
//! resolution. The all-zero value `0000-00-00 00:00:00` means "no date". The
//! compact form `YYYYMMDDHHMMSS` is accepted when parsing.

use chrono::{NaiveDateTime, Timelike};

/// Canonical wire format.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical "no date" value.
pub const SENTINEL: &str = "0000-00-00 00:00:00";

const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";
const COMPACT_SENTINEL: &str = "00000000000000";

/// Formats a timestamp in the canonical wire format. Sub-second precision is
/// dropped.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Parses a wire date.
///
/// Returns `Ok(None)` for the sentinel and an error for anything else that is
/// not a valid date.
///
/// ```
/// use cakemail_client::date;
///
/// assert_eq!(date::parse("0000-00-00 00:00:00").unwrap(), None);
///
/// let parsed = date::parse("2024-03-05 14:07:09").unwrap().unwrap();
/// assert_eq!(date::format(&parsed), "2024-03-05 14:07:09");
///
/// assert!(date::parse("yesterday").is_err());
/// ```
pub fn parse(value: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    if value == SENTINEL || value == COMPACT_SENTINEL {
        return Ok(None);
    }
    match NaiveDateTime::parse_from_str(value, FORMAT) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => NaiveDateTime::parse_from_str(value, COMPACT_FORMAT)
            .map(Some)
            .map_err(|_| e),
    }
}

/// Truncates a timestamp to the resolution the wire format can carry.
pub fn truncate(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

/// Serde adapter for `Option<NaiveDateTime>` fields.
///
/// Use together with `#[serde(default)]` so a missing field is `None`.
pub mod optional {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_str(super::SENTINEL),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => super::parse(&raw)
                .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e))),
        }
    }
}
