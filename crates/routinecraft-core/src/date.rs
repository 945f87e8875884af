//! Human-readable date labels.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}

/// Format a date as "Weekday, Month Ordinal-Day", e.g. "Sunday, March 10th".
///
/// Input that does not parse as a date is returned unchanged.
pub fn friendly_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => format!(
            "{}{}",
            parsed.format("%A, %B %-d"),
            ordinal_suffix(parsed.day())
        ),
        None => date.to_string(),
    }
}
