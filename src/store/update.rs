//! Optimistic in-place edits.

use contentcal_core::{CalResult, CalendarItem};

use super::CalendarStore;

impl CalendarStore {
    /// Replace the stored entity wholesale.
    ///
    /// Upsert policy: an unknown id degenerates to an insert. When the new
    /// `scheduled_date` lands on a different day, the id moves from its old
    /// bucket to the new one in the same call, and an emptied bucket is
    /// dropped.
    pub fn update(&mut self, item: CalendarItem) -> CalResult<()> {
        item.validate()?;
        self.upsert(item);
        Ok(())
    }
}
