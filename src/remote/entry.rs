//! Wire shape of calendar entries and conversion into the store schema.
//!
//! Providers return loosely-typed records; everything is checked here, at
//! the boundary, so the store only ever sees well-formed `CalendarItem`s.

use chrono::{DateTime, Utc};
use contentcal_core::{CalError, CalendarItem, ItemStatus};
use serde::{Deserialize, Serialize};

/// A calendar entry as the read service returns it: string-typed dates and
/// status, optional bookkeeping timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEntry {
    pub id: String,
    pub title: String,
    pub scheduled_date: String,
    pub status: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<WireEntry> for CalendarItem {
    type Error = CalError;

    fn try_from(entry: WireEntry) -> Result<Self, Self::Error> {
        let scheduled_date = parse_timestamp(&entry.id, "scheduledDate", &entry.scheduled_date)?;
        let status: ItemStatus = entry.status.parse()?;

        // Bookkeeping timestamps may be absent on the wire; fall back to now.
        let now = Utc::now();
        let created_at = match &entry.created_at {
            Some(s) => parse_timestamp(&entry.id, "createdAt", s)?,
            None => now,
        };
        let updated_at = match &entry.updated_at {
            Some(s) => parse_timestamp(&entry.id, "updatedAt", s)?,
            None => now,
        };

        let item = CalendarItem {
            id: entry.id,
            title: entry.title,
            scheduled_date,
            status,
            platform: entry.platform,
            content_type: entry.content_type,
            created_at,
            updated_at,
        };
        item.validate()?;
        Ok(item)
    }
}

fn parse_timestamp(id: &str, field: &str, value: &str) -> Result<DateTime<Utc>, CalError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            CalError::InvalidItem(format!(
                "entry '{}' has unparseable {}: '{}'",
                id, field, value
            ))
        })
}
