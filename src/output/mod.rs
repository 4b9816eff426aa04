//! Output formatting for calplan.
//!
//! The markup renderers (`rst`, `markdown`) serialize a parsed calendar
//! for the `render` command; the pretty and JSON formatters back the
//! diagnostic `check` and `info` commands.

mod json;
mod markdown;
mod pretty;
mod rst;

use chrono::NaiveDate;

use crate::calendar::{Calendar, CalendarSummary};
use crate::cli::args::{OutputFormat, RenderTarget};
use crate::error::CalplanError;

pub use json::{format_check_json, format_summary_json, to_json};
pub use markdown::render_markdown;
pub use pretty::{format_check_pretty, format_summary_pretty};
pub use rst::render_rst;

/// Render a calendar to the selected markup target.
#[must_use]
pub fn render_calendar(calendar: &Calendar, target: RenderTarget) -> String {
    match target {
        RenderTarget::Rst => render_rst(calendar),
        RenderTarget::Markdown => render_markdown(calendar),
    }
}

/// Format a calendar summary based on output format.
///
/// # Errors
///
/// Returns `CalplanError::Json` if JSON serialization fails.
pub fn format_summary(
    summary: &CalendarSummary,
    format: OutputFormat,
) -> Result<String, CalplanError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}

/// Format the `check` verdict based on output format.
///
/// # Errors
///
/// Returns `CalplanError::Json` if JSON serialization fails.
pub fn format_check(
    summary: &CalendarSummary,
    format: OutputFormat,
) -> Result<String, CalplanError> {
    match format {
        OutputFormat::Pretty => Ok(format_check_pretty(summary)),
        OutputFormat::Json => format_check_json(summary),
    }
}

/// Heading text for a schedule entry date, e.g. `2020-03-09 (Mon)`.
#[must_use]
pub fn format_heading_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%a)").to_string()
}

/// Wrap an annotation in `*…*` emphasis unless the source already wrote
/// it emphasized.
#[must_use]
pub fn emphasize(annotation: &str) -> String {
    if annotation.len() > 2 && annotation.starts_with('*') && annotation.ends_with('*') {
        annotation.to_string()
    } else {
        format!("*{annotation}*")
    }
}
