use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_optional_date(input: Option<&String>) -> Result<NaiveDate, String> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| s.to_string()),
        None => Ok(today()),
    }
}

/// ISO-8601 week number of `date` (1..=53).
///
/// Days belong to the ISO week containing their Thursday, so Dec 29-31 may
/// fall into week 1 and Jan 1-3 into week 52 or 53.
pub fn current_iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Calendar year of `date`.
///
/// This is intentionally the calendar year and not the ISO week-year:
/// Jan 1 2027 yields (2027, 53), not (2026, 53).
pub fn current_year(date: NaiveDate) -> i32 {
    date.year()
}

/// `YYYY-MM-DD`, as used in backup file names.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
