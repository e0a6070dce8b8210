//! Normalized in-memory store for calendar items.
//!
//! Three structures move together: the entity table (items by id), the date
//! index (day -> ids scheduled that day), and the fetch ledger (range key ->
//! last successful fetch). Every mutation commits them as one unit; readers
//! never observe an item indexed under the wrong day.

mod delete;
mod insert;
mod merge;
mod reconcile;
mod select;
mod update;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use contentcal_core::{CalendarItem, DateRange};

/// Queryable projection of calendar items under optimistic local edits and
/// server-confirmed merges.
#[derive(Debug, Default)]
pub struct CalendarStore {
    /// Entity table, keyed by item id (temporary or server-assigned)
    items: HashMap<String, CalendarItem>,
    /// Day -> ids scheduled that day. Buckets are dropped when emptied, so
    /// the key set only names days with at least one item.
    date_index: BTreeMap<NaiveDate, BTreeSet<String>>,
    /// Range key -> time of the last successful fetch for that range
    fetch_ledger: HashMap<String, DateTime<Utc>>,
    /// Bumped by `invalidate`; an in-flight fetch stamps the ledger only if
    /// the epoch it started under is still current.
    epoch: u64,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// When `range` was last fetched successfully, if it ever was.
    /// Absence means unknown/stale: the range must be refetched before its
    /// contents are trusted.
    pub fn fetched_at(&self, range: &DateRange) -> Option<DateTime<Utc>> {
        self.fetch_ledger.get(&range.ledger_key()).copied()
    }

    /// Whether cached contents for `range` can be trusted without a refetch.
    /// With `max_age: None` a ledger entry never goes stale on its own.
    pub fn is_fresh(&self, range: &DateRange, max_age: Option<Duration>) -> bool {
        match (self.fetched_at(range), max_age) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(at), Some(age)) => Utc::now() - at <= age,
        }
    }

    /// Drop all freshness tracking. Items and index are untouched; the next
    /// range query refetches instead of trusting ledger timestamps.
    pub fn invalidate(&mut self) {
        self.fetch_ledger.clear();
        self.epoch += 1;
    }

    pub(crate) fn index_insert(&mut self, day: NaiveDate, id: &str) {
        self.date_index
            .entry(day)
            .or_default()
            .insert(id.to_string());
    }

    pub(crate) fn index_remove(&mut self, day: NaiveDate, id: &str) {
        if let Some(bucket) = self.date_index.get_mut(&day) {
            bucket.remove(id);
            if bucket.is_empty() {
                self.date_index.remove(&day);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use contentcal_core::ItemStatus;

    /// Build an item scheduled at 12:00 UTC on the given day.
    pub fn make_item(id: &str, day: &str) -> CalendarItem {
        let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        let when = day.and_hms_opt(12, 0, 0).unwrap().and_utc();
        CalendarItem {
            id: id.to_string(),
            title: format!("Post {}", id),
            scheduled_date: when,
            status: ItemStatus::Scheduled,
            platform: "twitter".to_string(),
            content_type: "social".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    impl CalendarStore {
        /// Check the cross-structure invariants: every item indexed under
        /// exactly its current day, every indexed id backed by an entity,
        /// and no empty buckets.
        pub fn assert_consistent(&self) {
            for (id, item) in &self.items {
                let day = item.day_key();
                assert!(
                    self.date_index
                        .get(&day)
                        .is_some_and(|bucket| bucket.contains(id)),
                    "item {} not indexed under its day {}",
                    id,
                    day
                );
                let elsewhere = self
                    .date_index
                    .iter()
                    .filter(|(d, bucket)| **d != day && bucket.contains(id))
                    .count();
                assert_eq!(elsewhere, 0, "item {} indexed under a stale day", id);
            }
            for (day, bucket) in &self.date_index {
                assert!(!bucket.is_empty(), "empty bucket left for {}", day);
                for id in bucket {
                    let item = self
                        .items
                        .get(id)
                        .unwrap_or_else(|| panic!("dangling index entry {} on {}", id, day));
                    assert_eq!(item.day_key(), *day);
                }
            }
        }
    }
}
