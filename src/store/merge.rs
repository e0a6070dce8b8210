//! Merging server-confirmed fetch results.

use chrono::{DateTime, Utc};
use contentcal_core::{CalResult, CalendarItem, DateRange};

use super::CalendarStore;

impl CalendarStore {
    /// Merge a successful fetch into the store and stamp the ledger.
    ///
    /// Every item merges with the same insert-or-replace semantics as
    /// `update`. The whole batch is validated before anything is applied, so
    /// a bad payload leaves the store untouched.
    ///
    /// The ledger entry for `range` is written only when `epoch_at_request`
    /// still matches the store epoch: an `invalidate` that landed while the
    /// fetch was in flight wins over the stale freshness claim, though the
    /// items themselves still merge.
    pub fn apply_fetched(
        &mut self,
        items: Vec<CalendarItem>,
        range: &DateRange,
        fetched_at: DateTime<Utc>,
        epoch_at_request: u64,
    ) -> CalResult<()> {
        for item in &items {
            item.validate()?;
        }
        for item in items {
            self.upsert(item);
        }
        if epoch_at_request == self.epoch {
            self.fetch_ledger.insert(range.ledger_key(), fetched_at);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::make_item;
    use super::*;

    #[test]
    fn test_empty_fetch_still_stamps_ledger() {
        let mut store = CalendarStore::new();
        let range = DateRange::parse("2025-01-01", "2025-01-31").unwrap();
        store
            .apply_fetched(vec![], &range, Utc::now(), store.epoch())
            .unwrap();

        assert!(store.fetched_at(&range).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_merge_overwrites_optimistic_edits() {
        let mut store = CalendarStore::new();
        let mut local = make_item("item-1", "2025-02-10");
        local.title = "Locally edited".to_string();
        store.insert(local).unwrap();

        let range = DateRange::parse("2025-02-01", "2025-02-28").unwrap();
        let server = make_item("item-1", "2025-02-12");
        store
            .apply_fetched(vec![server], &range, Utc::now(), store.epoch())
            .unwrap();

        let stored = store.get("item-1").unwrap();
        assert_eq!(stored.title, "Post item-1");
        assert_eq!(stored.day_key().to_string(), "2025-02-12");
        store.assert_consistent();
    }

    #[test]
    fn test_invalid_payload_leaves_store_untouched() {
        let mut store = CalendarStore::new();
        store.insert(make_item("a", "2025-02-10")).unwrap();

        let range = DateRange::parse("2025-02-01", "2025-02-28").unwrap();
        let mut bad = make_item("b", "2025-02-11");
        bad.id = String::new();
        let good = make_item("c", "2025-02-12");

        assert!(
            store
                .apply_fetched(vec![good, bad], &range, Utc::now(), store.epoch())
                .is_err()
        );
        assert_eq!(store.len(), 1);
        assert!(store.fetched_at(&range).is_none());
        store.assert_consistent();
    }

    #[test]
    fn test_stale_epoch_merges_items_but_skips_stamp() {
        let mut store = CalendarStore::new();
        let range = DateRange::parse("2025-02-01", "2025-02-28").unwrap();
        let epoch_at_request = store.epoch();

        // Invalidation lands while the fetch is in flight.
        store.invalidate();
        store
            .apply_fetched(
                vec![make_item("a", "2025-02-10")],
                &range,
                Utc::now(),
                epoch_at_request,
            )
            .unwrap();

        assert!(store.get("a").is_some());
        assert!(store.fetched_at(&range).is_none());
        store.assert_consistent();
    }
}
