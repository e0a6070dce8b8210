//! Optimistic deletes.

use super::CalendarStore;

impl CalendarStore {
    /// Remove an item and its index entry.
    ///
    /// The bucket is located via the stored entity's own `scheduled_date`,
    /// and dropped if the removal empties it. Deleting an unknown id is a
    /// no-op, so a repeated delete is safe.
    pub fn remove(&mut self, id: &str) {
        if let Some(item) = self.items.remove(id) {
            self.index_remove(item.day_key(), id);
        }
    }
}
