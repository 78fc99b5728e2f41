//! Calendar date validation functions

use chrono::{DateTime, NaiveDate};

/// Parse raw text as a calendar date
///
/// Accepts the `YYYY-MM-DD` form a date input submits. A full RFC 3339 timestamp is
/// also accepted and reduced to its date; the time of day never takes part in
/// comparisons.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// A date is acceptable unless it falls strictly after `today`
pub fn is_not_future(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}
