//! DateFormatter: ISO-like date strings to "January 5, 2024".

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::content::ContentItem;

const LONG_FORM: &str = "%B %-d, %Y";

/// Local date-time layouts tried after RFC 3339.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse RFC 3339, a local date-time (`T` or space separated, seconds
/// optional) or `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(input, "%Y-%m-%d").ok())
}

/// Long-form en-US date, or the input unchanged if it does not parse.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format(LONG_FORM).to_string(),
        None => input.to_string(),
    }
}

/// Stable newest-first sort. Unparseable dates go last.
pub fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
