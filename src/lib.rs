//! In-memory content calendar cache.
//!
//! Holds calendar entries fetched from a remote read service, applies
//! optimistic local mutations ahead of server confirmation, and tracks
//! per-range freshness so repeat queries don't refetch needlessly.
//!
//! - [`store::CalendarStore`] is the synchronous core: entity table,
//!   per-day index, and fetch ledger, kept consistent as one unit.
//! - [`cache::CalendarCache`] wraps the store in a mutex and drives
//!   fetches through a [`remote::ReadService`].
//! - [`remote`] provides the service trait plus a subprocess provider
//!   speaking JSON over stdin/stdout.

pub mod cache;
pub mod config;
pub mod remote;
pub mod store;

pub use cache::CalendarCache;
pub use config::CacheConfig;
pub use contentcal_core::{CalError, CalResult, CalendarItem, DateRange, ItemStatus};
pub use store::CalendarStore;
