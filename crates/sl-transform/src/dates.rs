//! Tolerant date parsing and date-key encoding
//!
//! Order dates arrive in whatever format each source connector emitted.
//! Parsing tries a fixed list of formats in order; a value no format
//! accepts is dropped (dimension) or sentineled (fact), never fatal.

use chrono::NaiveDate;

/// Date key written for rows whose order date is missing or unparseable
pub const SENTINEL_DATE_KEY: i64 = 19_000_101;

/// Date-only formats tried first
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Datetime formats for connectors that export timestamps
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a raw date string, trying each accepted format in order.
/// Returns `None` when nothing matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Integer-encode a date as YYYYMMDD. The key is derived from the date
/// value itself, so ordering of keys always follows ordering of dates.
pub fn date_key(date: NaiveDate) -> i64 {
    use chrono::Datelike;
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

/// Locale-independent full English month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize).clamp(1, 12) - 1]
}

/// Calendar quarter for a month: 1-3 -> 1, 4-6 -> 2, 7-9 -> 3, 10-12 -> 4
pub fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
