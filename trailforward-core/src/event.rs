//! Event record types.
//!
//! `EventRecord` is what the record store hands back; `NewEvent` is the
//! payload of a create call. Records are immutable once created: there is no
//! update operation, only create and delete.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};

/// A community event as stored by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Payload for creating an event.
///
/// Accepts both the plain field names and the names used by the
/// "add event" HTML form (`eventName`, `eventDate`, `eventLocation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(alias = "eventName")]
    pub name: String,
    #[serde(alias = "eventDate", deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    #[serde(alias = "eventLocation")]
    pub location: String,
}

impl EventRecord {
    /// Builds the record a store assigns `id` to when creating `event`.
    pub fn from_new(id: i64, event: NewEvent) -> Self {
        EventRecord {
            id,
            name: event.name,
            date: event.date,
            location: event.location,
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format("%Y-%m-%d %H:%M"))
    }
}

/// Parse an event date.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2025-03-20T15:00:00Z`, offsets converted to UTC)
/// - HTML `datetime-local` (`2025-03-20T15:00` or with seconds), read as UTC
/// - SQL `DATETIME` (`2025-03-20 15:00:00`), read as UTC
/// - bare date (`2025-03-20`), midnight UTC
pub fn parse_event_date(s: &str) -> CoreResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::InvalidDate(s.to_string()))
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_event_date(&raw).map_err(serde::de::Error::custom)
}
