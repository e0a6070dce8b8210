//! Cache tuning.

use chrono::Duration;

/// Configuration for a [`crate::CalendarCache`] session.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// How long a ledger entry counts as fresh. `None` (the default) means a
    /// fetched range stays fresh until `invalidate` is called, which matches
    /// the behavior of a session-scoped UI cache.
    pub fresh_for: Option<Duration>,
}

impl CacheConfig {
    /// Freshness window of `minutes`, for callers that want periodic
    /// refetching instead of explicit invalidation.
    pub fn fresh_for_minutes(minutes: i64) -> Self {
        CacheConfig {
            fresh_for: Some(Duration::minutes(minutes)),
        }
    }
}
