//! Schedule parsing and expansion.
//!
//! The pipeline is: split the document at its dashed delimiters, parse and
//! validate the header, then expand the date range into the concrete
//! [`Calendar`]. [`parse`] wires the three stages together.

mod expand;
mod header;
mod sections;
mod types;

pub use expand::expand;
pub use header::parse_header;
pub use sections::{is_delimiter, split_sections, SplitDocument};
pub use types::{
    Calendar, CalendarSummary, ContentBlock, EntryKind, HeaderConfig, ScheduleEntry, SkipDate,
};

use crate::error::CalplanError;

/// Parse a complete schedule document into a [`Calendar`].
///
/// Pure function of the input text; no partial calendar is returned on
/// failure.
///
/// # Errors
///
/// Returns [`CalplanError::Format`] for malformed syntax and
/// [`CalplanError::Validation`] for semantically inconsistent input.
pub fn parse(text: &str) -> Result<Calendar, CalplanError> {
    let document = split_sections(text)?;
    let config = parse_header(&document.header_lines)?;
    expand(config, document.blocks)
}
