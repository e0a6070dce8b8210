//! Inclusive day ranges for calendar queries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalError, CalResult};

/// An inclusive range of calendar days.
///
/// Calendar queries are day-granular: a range covers every item whose
/// scheduled day falls between `start` and `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CalResult<Self> {
        if end < start {
            return Err(CalError::InvalidRange(format!(
                "range ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(DateRange { start, end })
    }

    /// Parse a range from a pair of `YYYY-MM-DD` strings.
    pub fn parse(from: &str, to: &str) -> CalResult<Self> {
        DateRange::new(parse_day(from)?, parse_day(to)?)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Start of the first day, UTC.
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.and_hms_opt(0, 0, 0).unwrap().and_utc()
    }

    /// End of the last day, UTC.
    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end.and_hms_opt(23, 59, 59).unwrap().and_utc()
    }

    /// Key this range is tracked under in the fetch ledger,
    /// e.g. `"2025-01-01_2025-01-31"`.
    pub fn ledger_key(&self) -> String {
        format!(
            "{}_{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Parse a `YYYY-MM-DD` day string.
fn parse_day(s: &str) -> CalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CalError::InvalidRange(format!("Invalid date '{}'. Expected YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_key() {
        let range = DateRange::parse("2025-01-01", "2025-01-31").unwrap();
        assert_eq!(range.ledger_key(), "2025-01-01_2025-01-31");
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(DateRange::parse("2025-02-10", "2025-02-01").is_err());
    }

    #[test]
    fn test_rejects_malformed_day() {
        assert!(DateRange::parse("01/02/2025", "2025-02-10").is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::parse("2025-02-12", "2025-02-18").unwrap();
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 2, 12).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 2, 18).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 2, 19).unwrap()));
    }

    #[test]
    fn test_utc_bounds_cover_whole_days() {
        let range = DateRange::parse("2025-02-15", "2025-02-15").unwrap();
        assert_eq!(range.start_utc().to_rfc3339(), "2025-02-15T00:00:00+00:00");
        assert_eq!(range.end_utc().to_rfc3339(), "2025-02-15T23:59:59+00:00");
    }
}
