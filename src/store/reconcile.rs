//! Temporary-id reconciliation after server persistence.

use contentcal_core::{CalResult, CalendarItem};

use super::CalendarStore;

impl CalendarStore {
    /// Swap a client-minted temporary id for the server-assigned item.
    ///
    /// Removes the entry stored under `temp_id` (entity and index) if it is
    /// still present, then upserts `server_item`. Exactly one of the two ids
    /// survives. Idempotent when the temporary entry is already gone.
    pub fn reconcile(&mut self, temp_id: &str, server_item: CalendarItem) -> CalResult<()> {
        server_item.validate()?;
        self.remove(temp_id);
        self.upsert(server_item);
        Ok(())
    }
}
