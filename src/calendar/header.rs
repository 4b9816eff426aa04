//! Parsing the fixed-field header of a schedule file.
//!
//! The header consists of the lines preceding the first dashed delimiter:
//!
//! ```text
//! Start: 2020-03-09
//! End: 2020-07-06
//! Weekdays: Mon, Fri
//! Skip:
//! - 2020-04-10: *Holiday: Good Friday*
//! - 2020-04-20: *Holiday: Tiradentes*
//! ```
//!
//! `Start:`, `End:` and `Weekdays:` are each required exactly once, in any
//! order. `Skip:` is optional and introduces a nested list; the list ends
//! at the first line that is not a `- <date>: <annotation>` entry.

use chrono::{NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::types::{HeaderConfig, SkipDate};
use crate::core::{parse_iso_date, parse_weekday};
use crate::error::CalplanError;

static SKIP_ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-\s+([0-9]{4}-[0-9]{2}-[0-9]{2})\s*:\s*(.*)$")
        .unwrap_or_else(|e| panic!("Invalid skip entry regex: {e}"))
});

/// Parse and validate the header lines of a schedule document.
///
/// Line `i` of `lines` is reported as source line `i + 1`; the header is
/// always the top of the document.
///
/// # Errors
///
/// Returns [`CalplanError::Format`] for malformed syntax (unparsable date,
/// unrecognized weekday name, missing/duplicate field, unrecognized line)
/// and [`CalplanError::Validation`] for semantic violations (`End` before
/// `Start`, skip date out of range, empty weekday set).
pub fn parse_header(lines: &[String]) -> Result<HeaderConfig, CalplanError> {
    let mut start: Option<NaiveDate> = None;
    let mut end: Option<NaiveDate> = None;
    let mut weekdays: Option<Vec<Weekday>> = None;
    let mut skips: Option<Vec<SkipDate>> = None;

    let mut index = 0;
    while index < lines.len() {
        let line_no = index + 1;
        let line = lines[index].trim();
        index += 1;

        if line.is_empty() {
            continue;
        }

        if let Some(value) = line.strip_prefix("Start:") {
            require_unset(start.is_none(), "Start:", line_no)?;
            start = Some(parse_date_field(value, "Start:", line_no)?);
        } else if let Some(value) = line.strip_prefix("End:") {
            require_unset(end.is_none(), "End:", line_no)?;
            end = Some(parse_date_field(value, "End:", line_no)?);
        } else if let Some(value) = line.strip_prefix("Weekdays:") {
            require_unset(weekdays.is_none(), "Weekdays:", line_no)?;
            weekdays = Some(parse_weekday_list(value, line_no)?);
        } else if let Some(value) = line.strip_prefix("Skip:") {
            require_unset(skips.is_none(), "Skip:", line_no)?;
            if !value.trim().is_empty() {
                return Err(CalplanError::format(
                    line_no,
                    format!("'Skip:' introduces a list; unexpected value '{}'", value.trim()),
                ));
            }
            let (entries, consumed) = parse_skip_list(&lines[index..], line_no)?;
            skips = Some(entries);
            index += consumed;
        } else {
            return Err(CalplanError::format(
                line_no,
                format!("unrecognized header line '{line}'"),
            ));
        }
    }

    let last_line = lines.len().max(1);
    let start = start
        .ok_or_else(|| CalplanError::format(last_line, "missing required field 'Start:'"))?;
    let end = end.ok_or_else(|| CalplanError::format(last_line, "missing required field 'End:'"))?;
    let weekdays = weekdays
        .ok_or_else(|| CalplanError::format(last_line, "missing required field 'Weekdays:'"))?;
    let skips = skips.unwrap_or_default();

    validate(HeaderConfig {
        start,
        end,
        weekdays,
        skips,
    })
}

fn require_unset(unset: bool, field: &str, line_no: usize) -> Result<(), CalplanError> {
    if unset {
        Ok(())
    } else {
        Err(CalplanError::format(
            line_no,
            format!("duplicate field '{field}'"),
        ))
    }
}

fn parse_date_field(value: &str, field: &str, line_no: usize) -> Result<NaiveDate, CalplanError> {
    parse_iso_date(value).ok_or_else(|| {
        CalplanError::format(
            line_no,
            format!(
                "'{field}' expects a YYYY-MM-DD date, got '{}'",
                value.trim()
            ),
        )
    })
}

/// Parse a comma-separated weekday list, collapsing duplicates and sorting
/// Monday-first.
fn parse_weekday_list(value: &str, line_no: usize) -> Result<Vec<Weekday>, CalplanError> {
    let value = value.trim();
    if value.is_empty() {
        // Syntactically fine; rejected by validation as an empty set.
        return Ok(Vec::new());
    }

    let mut days = Vec::new();
    for name in value.split(',') {
        let day = parse_weekday(name).ok_or_else(|| {
            CalplanError::format(
                line_no,
                format!("unrecognized weekday name '{}'", name.trim()),
            )
        })?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days.sort_by_key(|d| d.num_days_from_monday());
    Ok(days)
}

/// Parse the nested skip list following a `Skip:` line.
///
/// Returns the entries and the number of lines consumed. The list ends at
/// the first line that does not match `- <date>: <annotation>`.
fn parse_skip_list(
    rest: &[String],
    skip_line_no: usize,
) -> Result<(Vec<SkipDate>, usize), CalplanError> {
    let mut entries = Vec::new();
    let mut consumed = 0;

    for line in rest {
        let Some(captures) = SKIP_ENTRY_PATTERN.captures(line) else {
            break;
        };
        let line_no = skip_line_no + consumed + 1;
        let date = parse_iso_date(&captures[1]).ok_or_else(|| {
            CalplanError::format(
                line_no,
                format!("invalid skip date '{}'", &captures[1]),
            )
        })?;
        entries.push(SkipDate {
            date,
            annotation: captures[2].trim().to_string(),
        });
        consumed += 1;
    }

    Ok((entries, consumed))
}

/// End-of-parse validation of a syntactically complete header.
fn validate(config: HeaderConfig) -> Result<HeaderConfig, CalplanError> {
    if config.end < config.start {
        return Err(CalplanError::validation(
            "End",
            format!(
                "end date {} is before start date {}",
                config.end, config.start
            ),
        ));
    }
    if config.weekdays.is_empty() {
        return Err(CalplanError::validation(
            "Weekdays",
            "weekday set is empty",
        ));
    }
    for skip in &config.skips {
        if skip.date < config.start || skip.date > config.end {
            return Err(CalplanError::validation(
                "Skip",
                format!(
                    "skip date {} is outside the range {}..{}",
                    skip.date, config.start, config.end
                ),
            ));
        }
    }
    Ok(config)
}
