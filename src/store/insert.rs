//! Optimistic inserts and the shared upsert path.

use contentcal_core::{CalResult, CalendarItem};

use super::CalendarStore;

impl CalendarStore {
    /// Insert an item ahead of server confirmation.
    ///
    /// The item is stored under its id (temporary or server-assigned) and
    /// indexed under its scheduled day. A duplicate id overwrites the stored
    /// entity and re-indexes it.
    pub fn insert(&mut self, item: CalendarItem) -> CalResult<()> {
        item.validate()?;
        self.upsert(item);
        Ok(())
    }

    /// Entity-table + index upsert shared by insert, update, reconcile, and
    /// fetch merge. If the id was already present under a different day, the
    /// old bucket entry is removed in the same call.
    pub(crate) fn upsert(&mut self, item: CalendarItem) {
        let id = item.id.clone();
        let new_day = item.day_key();
        let old_day = self.items.get(&id).map(CalendarItem::day_key);

        self.items.insert(id.clone(), item);
        if let Some(old_day) = old_day
            && old_day != new_day
        {
            self.index_remove(old_day, &id);
        }
        self.index_insert(new_day, &id);
    }
}
