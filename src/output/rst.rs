//! reStructuredText rendering of a calendar.

use crate::calendar::{Calendar, EntryKind};
use crate::output::{emphasize, format_heading_date};

/// Render a calendar as reStructuredText.
///
/// Each schedule entry becomes a section: the formatted date underlined
/// with dashes, then the day's content verbatim, or the emphasized skip
/// annotation for suppressed days. Output is byte-identical for identical
/// calendars.
#[must_use]
pub fn render_rst(calendar: &Calendar) -> String {
    let mut lines: Vec<String> = Vec::new();

    for entry in calendar.entries() {
        let heading = format_heading_date(entry.date);
        let underline = "-".repeat(heading.len());
        lines.push(heading);
        lines.push(underline);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse;

    #[test]
    fn test_render_sections() {
        let calendar = parse(
            "Start: 2020-03-09\n\
             End: 2020-03-13\n\
             Weekdays: Mon, Fri\n\
             ---\n\
             First day\n\
             \n\
             * a topic\n\
             ---\n\
             Second day\n",
        )
        .unwrap();

        assert_eq!(
            render_rst(&calendar),
            "2020-03-09 (Mon)\n\
             ----------------\n\
             \n\
             First day\n\
             \n\
             * a topic\n\
             \n\
             2020-03-13 (Fri)\n\
             ----------------\n\
             \n\
             Second day\n"
        );
    }

    #[test]
    fn test_render_skip_entry_emphasized() {
        let calendar = parse(
            "Start: 2020-03-09\n\
             End: 2020-03-13\n\
             Weekdays: Mon, Fri\n\
             Skip:\n\
             - 2020-03-13: Holiday\n\
             ---\n\
             Only day\n",
        )
        .unwrap();

        let output = render_rst(&calendar);
        assert!(output.contains("2020-03-13 (Fri)\n----------------\n\n*Holiday*\n"));
    }

    #[test]
    fn test_already_emphasized_annotation_not_doubled() {
        let calendar = parse(
            "Start: 2020-03-09\n\
             End: 2020-03-13\n\
             Weekdays: Mon, Fri\n\
             Skip:\n\
             - 2020-03-13: *Holiday*\n\
             ---\n\
             Only day\n",
        )
        .unwrap();

        let output = render_rst(&calendar);
        assert!(output.contains("\n*Holiday*\n"));
        assert!(!output.contains("**Holiday**"));
    }

    #[test]
    fn test_empty_block_renders_bare_heading() {
        let calendar = parse(
            "Start: 2020-03-09\nEnd: 2020-03-09\nWeekdays: Mon\n---\n\n",
        )
        .unwrap();

        assert_eq!(render_rst(&calendar), "2020-03-09 (Mon)\n----------------\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = "Start: 2020-03-09\nEnd: 2020-03-13\nWeekdays: Mon, Fri\n---\na\n---\nb\n";
        let first = render_rst(&parse(text).unwrap());
        let second = render_rst(&parse(text).unwrap());
        assert_eq!(first, second);
    }
}
