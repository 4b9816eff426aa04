//! Markdown rendering of a calendar.

use crate::calendar::{Calendar, EntryKind};
use crate::output::{emphasize, format_heading_date};

/// Render a calendar as Markdown.
///
/// Same section-per-entry layout as the reStructuredText renderer, with
/// `###` date headings.
#[must_use]
pub fn render_markdown(calendar: &Calendar) -> String {
    let mut lines: Vec<String> = Vec::new();

    for entry in calendar.entries() {
        lines.push(format!("### {}", format_heading_date(entry.date)));

        match &entry.kind {
            EntryKind::Day { content } => {
                if !content.is_empty() {
                    lines.push(String::new());
                    lines.extend(content.lines.iter().cloned());
                }
            }
            EntryKind::Skip { annotation } => {
                lines.push(String::new());
                lines.push(emphasize(annotation));
            }
        }
        lines.push(String::new());
    }

    let mut output = lines.join("\n");
    output.truncate(output.trim_end_matches('\n').len());
    output.push('\n');
    output
}
