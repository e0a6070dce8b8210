//! Thread-safe cache front: the store behind a mutex, fetches through a
//! read service.
//!
//! The mutex guards entity table, date index, and fetch ledger as one unit,
//! and is never held across an await: a fetch captures the store epoch,
//! releases the lock for the duration of the request, then re-locks to
//! merge. Local reads and optimistic edits stay available while a fetch is
//! in flight; overlapping fetches resolve last-writer-wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use contentcal_core::{CalResult, CalendarItem, DateRange};

use crate::config::CacheConfig;
use crate::remote::ReadService;
use crate::store::CalendarStore;

pub struct CalendarCache {
    store: Mutex<CalendarStore>,
    service: Arc<dyn ReadService>,
    config: CacheConfig,
}

impl CalendarCache {
    pub fn new(service: Arc<dyn ReadService>, config: CacheConfig) -> Self {
        CalendarCache {
            store: Mutex::new(CalendarStore::new()),
            service,
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CalendarStore> {
        // Store methods restore their invariants before returning, so a
        // poisoned lock still guards a usable store.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch `range` from the read service, merge the result, and return
    /// the items now cached for it.
    ///
    /// On failure the store is untouched: previously cached items stay
    /// visible and the error goes to the caller. Stale-but-present beats
    /// empty on a transient network failure.
    pub async fn fetch_range(&self, range: &DateRange) -> CalResult<Vec<CalendarItem>> {
        let epoch = self.lock().epoch();

        let fetched = match self.service.entries_in_range(range).await {
            Ok(items) => items,
            Err(err) => {
                warn!(range = %range.ledger_key(), error = %err, "range fetch failed; keeping cached items");
                return Err(err);
            }
        };

        let mut store = self.lock();
        debug!(range = %range.ledger_key(), count = fetched.len(), "merging fetched range");
        store.apply_fetched(fetched, range, Utc::now(), epoch)?;
        Ok(store.items_in_range(range))
    }

    /// Items for `range`, refetching first when the ledger says the range
    /// is stale. A fetch failure propagates; `peek_range` remains available
    /// as the stale fallback.
    pub async fn items_in_range(&self, range: &DateRange) -> CalResult<Vec<CalendarItem>> {
        {
            let store = self.lock();
            if store.is_fresh(range, self.config.fresh_for) {
                return Ok(store.items_in_range(range));
            }
        }
        self.fetch_range(range).await
    }

    /// Items currently cached for `range`. Never fetches.
    pub fn peek_range(&self, range: &DateRange) -> Vec<CalendarItem> {
        self.lock().items_in_range(range)
    }

    pub fn insert(&self, item: CalendarItem) -> CalResult<()> {
        debug!(id = %item.id, "optimistic insert");
        self.lock().insert(item)
    }

    pub fn update(&self, item: CalendarItem) -> CalResult<()> {
        debug!(id = %item.id, "optimistic update");
        self.lock().update(item)
    }

    pub fn remove(&self, id: &str) {
        debug!(id = %id, "optimistic delete");
        self.lock().remove(id);
    }

    /// Swap a temporary id for the server-assigned item once the create
    /// request has been confirmed.
    pub fn reconcile(&self, temp_id: &str, server_item: CalendarItem) -> CalResult<()> {
        debug!(temp_id = %temp_id, server_id = %server_item.id, "reconciling temporary id");
        self.lock().reconcile(temp_id, server_item)
    }

    /// Reset freshness tracking; cached items stay visible.
    pub fn invalidate(&self) {
        debug!("invalidating fetch ledger");
        self.lock().invalidate();
    }

    pub fn get(&self, id: &str) -> Option<CalendarItem> {
        self.lock().get(id).cloned()
    }

    pub fn fetched_at(&self, range: &DateRange) -> Option<DateTime<Utc>> {
        self.lock().fetched_at(range)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
