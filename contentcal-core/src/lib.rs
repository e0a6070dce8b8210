//! Core types for the contentcal cache.
//!
//! This crate provides the shared types used by the store, the cache front,
//! and calendar read providers:
//! - `CalendarItem` and `ItemStatus` for scheduled content entries
//! - `DateRange` for day-granular calendar queries
//! - `CalError`/`CalResult` for the error surface

pub mod date_range;
pub mod error;
pub mod item;

pub use date_range::DateRange;
pub use error::{CalError, CalResult};
pub use item::{CalendarItem, ItemStatus, TEMP_ID_PREFIX};
