//! Provider-neutral content calendar entry types.
//!
//! These types represent scheduled content entries in a provider-agnostic
//! way. Read providers convert their API responses into these types, and
//! the store works exclusively with them for indexing, merging, and range
//! queries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalError, CalResult};

/// Prefix for client-minted ids that have not been persisted remotely yet.
/// Reconciliation swaps these for the server-assigned id.
pub const TEMP_ID_PREFIX: &str = "tmp-";

/// One scheduled content entry (provider-neutral).
///
/// Serializes with camelCase field names, matching the wire shape the
/// calendar read service speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    /// Server-assigned id, or a temporary `tmp-<uuid>` id before persistence
    pub id: String,
    pub title: String,
    /// When the content is scheduled to go out
    pub scheduled_date: DateTime<Utc>,
    pub status: ItemStatus,
    /// Target platform tag (e.g. "twitter")
    pub platform: String,
    /// Content kind tag (e.g. "social", "blog")
    pub content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarItem {
    /// Create a locally-authored item with a freshly minted temporary id,
    /// pending remote persistence.
    pub fn new_local(
        title: &str,
        scheduled_date: DateTime<Utc>,
        status: ItemStatus,
        platform: &str,
        content_type: &str,
    ) -> Self {
        let now = Utc::now();
        CalendarItem {
            id: format!("{}{}", TEMP_ID_PREFIX, Uuid::new_v4()),
            title: title.to_string(),
            scheduled_date,
            status,
            platform: platform.to_string(),
            content_type: content_type.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this item still carries a client-minted temporary id.
    pub fn has_temporary_id(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }

    /// The UTC calendar day this item is scheduled on.
    ///
    /// This is the single definition of the day an item is indexed under.
    pub fn day_key(&self) -> NaiveDate {
        self.scheduled_date.date_naive()
    }

    /// Reject items that must never enter the store.
    pub fn validate(&self) -> CalResult<()> {
        if self.id.trim().is_empty() {
            return Err(CalError::InvalidItem("item id must not be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(CalError::InvalidItem(format!(
                "item '{}' has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}

/// Lifecycle status of a calendar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Scheduled => "scheduled",
            ItemStatus::Published => "published",
            ItemStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ItemStatus::Draft),
            "scheduled" => Ok(ItemStatus::Scheduled),
            "published" => Ok(ItemStatus::Published),
            "archived" => Ok(ItemStatus::Archived),
            other => Err(CalError::InvalidItem(format!(
                "unknown item status '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_item() -> CalendarItem {
        let when = Utc.with_ymd_and_hms(2025, 2, 15, 9, 30, 0).unwrap();
        CalendarItem {
            id: "item-1".to_string(),
            title: "Launch teaser".to_string(),
            scheduled_date: when,
            status: ItemStatus::Scheduled,
            platform: "twitter".to_string(),
            content_type: "social".to_string(),
            created_at: when,
            updated_at: when,
        }
    }

    #[test]
    fn test_day_key_is_utc_calendar_day() {
        let mut item = make_test_item();
        item.scheduled_date = Utc.with_ymd_and_hms(2025, 2, 15, 23, 59, 59).unwrap();
        assert_eq!(item.day_key(), NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
    }

    #[test]
    fn test_new_local_mints_temporary_id() {
        let item = CalendarItem::new_local(
            "Draft post",
            Utc::now(),
            ItemStatus::Draft,
            "linkedin",
            "social",
        );
        assert!(item.has_temporary_id());
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut item = make_test_item();
        item.title = "  ".to_string();
        assert!(item.validate().is_err());

        let mut item = make_test_item();
        item.id = String::new();
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ItemStatus::Draft,
            ItemStatus::Scheduled,
            ItemStatus::Published,
            ItemStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(make_test_item()).unwrap();
        assert!(json.get("scheduledDate").is_some());
        assert_eq!(json["status"], "scheduled");
        assert!(json.get("contentType").is_some());
    }
}
