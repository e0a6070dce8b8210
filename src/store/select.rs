//! Range reads over the date index.

use contentcal_core::{CalendarItem, DateRange};

use super::CalendarStore;

impl CalendarStore {
    /// All items whose current scheduled day lies in `range`, ascending by
    /// `scheduled_date` with ties broken by id.
    ///
    /// Ids whose entity record is gone are skipped rather than surfaced.
    pub fn items_in_range(&self, range: &DateRange) -> Vec<CalendarItem> {
        let mut found: Vec<CalendarItem> = self
            .date_index
            .range(range.start..=range.end)
            .flat_map(|(_, ids)| ids.iter())
            .filter_map(|id| self.items.get(id).cloned())
            .collect();

        // Ordering is imposed here, not inherited from index iteration.
        found.sort_by(|a, b| {
            a.scheduled_date
                .cmp(&b.scheduled_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        found
    }
}
