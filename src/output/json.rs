//! JSON output formatting for calplan.
//!
//! Used by the diagnostic commands (`check`, `info`) when `--output json`
//! is selected.

use serde::Serialize;
use serde_json::json;

use crate::calendar::CalendarSummary;
use crate::error::CalplanError;

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CalplanError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CalplanError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a calendar summary as JSON for the `info` command.
///
/// # Errors
///
/// Returns `CalplanError::Json` if serialization fails.
pub fn format_summary_json(summary: &CalendarSummary) -> Result<String, CalplanError> {
    to_json(summary)
}

/// Format the `check` verdict as JSON.
///
/// # Errors
///
/// Returns `CalplanError::Json` if serialization fails.
pub fn format_check_json(summary: &CalendarSummary) -> Result<String, CalplanError> {
    let output = json!({
        "valid": true,
        "summary": summary,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
