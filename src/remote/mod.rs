//! Remote calendar read service.
//!
//! [`ReadService`] is the seam the cache fetches through; anything that can
//! return the entries scheduled in a date range can back it. [`Remote`] is
//! the shipped implementation: it delegates to an external provider binary
//! over the JSON protocol in [`protocol`].

pub mod entry;
pub mod protocol;
pub mod provider;

use async_trait::async_trait;
use contentcal_core::{CalResult, CalendarItem, DateRange};

use crate::remote::entry::WireEntry;
use crate::remote::protocol::ListEntries;
use crate::remote::provider::Provider;

/// The one operation the cache needs from the outside world.
#[async_trait]
pub trait ReadService: Send + Sync {
    /// All entries whose scheduled date falls within `range`.
    async fn entries_in_range(&self, range: &DateRange) -> CalResult<Vec<CalendarItem>>;
}

/// Remote read-service configuration (provider plus provider-specific
/// settings such as account or workspace ids).
#[derive(Debug, Clone)]
pub struct Remote {
    pub provider: Provider,
    pub config: serde_json::Map<String, serde_json::Value>,
}

impl Remote {
    pub fn new(provider: Provider, config: serde_json::Map<String, serde_json::Value>) -> Self {
        Remote { provider, config }
    }
}

#[async_trait]
impl ReadService for Remote {
    async fn entries_in_range(&self, range: &DateRange) -> CalResult<Vec<CalendarItem>> {
        let entries: Vec<WireEntry> = self
            .provider
            .call(ListEntries {
                remote_config: self.config.clone(),
                from: range.start_utc().to_rfc3339(),
                to: range.end_utc().to_rfc3339(),
            })
            .await?;

        entries.into_iter().map(CalendarItem::try_from).collect()
    }
}
