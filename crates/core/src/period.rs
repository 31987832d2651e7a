//! Named reporting periods and their date ranges.

use chrono::{Datelike, Months, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

use crate::types::Timestamp;

/// A named dashboard/report period. Deserialized from the `?period=` query
/// parameter; defaults to [`Period::Month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

/// A half-open UTC time range: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Period {
    /// Resolve this period to the range containing `now`.
    ///
    /// Weeks start on Monday; quarters are calendar quarters.
    pub fn range(&self, now: Timestamp) -> PeriodRange {
        let today = now.date_naive();
        let (start, end) = match self {
            Period::Week => {
                let monday = today
                    - chrono::Duration::days(today.weekday().num_days_from_monday() as i64);
                (monday, monday + chrono::Duration::days(7))
            }
            Period::Month => {
                let first = first_of_month(today.year(), today.month());
                (first, first + Months::new(1))
            }
            Period::Quarter => {
                let quarter_month = ((today.month() - 1) / 3) * 3 + 1;
                let first = first_of_month(today.year(), quarter_month);
                (first, first + Months::new(3))
            }
            Period::Year => {
                let first = first_of_month(today.year(), 1);
                (first, first + Months::new(12))
            }
        };
        PeriodRange {
            start: midnight(start),
            end: midnight(end),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Both inputs are derived from a valid date, so this cannot fail.
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid year-month")
}

fn midnight(date: NaiveDate) -> Timestamp {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight exists"))
}

/// Start of the current UTC day. Used for overdue cutoffs.
pub fn start_of_today(now: Timestamp) -> Timestamp {
    midnight(now.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Timestamp {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_week_starts_monday() {
        // 2026-08-27 is a Thursday.
        let range = Period::Week.range(at("2026-08-27T15:30:00Z"));
        assert_eq!(range.start, at("2026-08-24T00:00:00Z"));
        assert_eq!(range.end, at("2026-08-31T00:00:00Z"));
    }

    #[test]
    fn test_month_range() {
        let range = Period::Month.range(at("2026-02-10T08:00:00Z"));
        assert_eq!(range.start, at("2026-02-01T00:00:00Z"));
        assert_eq!(range.end, at("2026-03-01T00:00:00Z"));
    }

    #[test]
    fn test_quarter_range() {
        let range = Period::Quarter.range(at("2026-08-27T00:00:00Z"));
        assert_eq!(range.start, at("2026-07-01T00:00:00Z"));
        assert_eq!(range.end, at("2026-10-01T00:00:00Z"));
    }

    #[test]
    fn test_year_range_crosses_to_next_january() {
        let range = Period::Year.range(at("2026-12-31T23:59:59Z"));
        assert_eq!(range.start, at("2026-01-01T00:00:00Z"));
        assert_eq!(range.end, at("2027-01-01T00:00:00Z"));
    }

    #[test]
    fn test_start_of_today() {
        assert_eq!(
            start_of_today(at("2026-08-27T15:30:00Z")),
            at("2026-08-27T00:00:00Z")
        );
    }
}
