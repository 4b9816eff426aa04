//! Date and weekday parsing utilities.
//!
//! Schedule headers use ISO calendar dates and abbreviated weekday names.
//! This module wraps the `chrono` primitives both the header parser and the
//! renderers share.

use chrono::{NaiveDate, Weekday};

/// Parse an ISO date literal (`YYYY-MM-DD`).
///
/// Returns `None` if the input is not a valid calendar date in that form.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Parse an abbreviated weekday name.
///
/// Names are the case-sensitive three-letter abbreviations used by the
/// schedule format: `Mon`, `Tue`, `Wed`, `Thu`, `Fri`, `Sat`, `Sun`.
///
/// Returns `None` for anything else, including full names and lowercase
/// spellings.
#[must_use]
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    match input.trim() {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Abbreviated name for a weekday, matching the header spelling.
#[must_use]
pub const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
