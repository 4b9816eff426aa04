//! Splitting a schedule document into header and day sections.
//!
//! A delimiter is a line of three or more dashes, optionally surrounded by
//! whitespace. Everything before the first delimiter is the header; each
//! stretch between consecutive delimiters (and after the last one) is one
//! day section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::types::ContentBlock;
use crate::error::CalplanError;

static DELIMITER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-{3,}\s*$").unwrap_or_else(|e| panic!("Invalid delimiter regex: {e}"))
});

/// A document split at its dashed delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    /// Header lines, in source order. Line `i` is source line `i + 1`.
    pub header_lines: Vec<String>,
    /// Day sections, in document order.
    pub blocks: Vec<ContentBlock>,
}

/// Whether `line` is a section delimiter.
#[must_use]
pub fn is_delimiter(line: &str) -> bool {
    DELIMITER_PATTERN.is_match(line)
}

/// Partition a schedule document at its dashed delimiter lines.
///
/// Blocks keep their lines verbatim apart from trailing-whitespace
/// stripping; leading and trailing blank lines of each block are trimmed.
/// A block left empty by trimming still counts as one day section.
///
/// # Errors
///
/// Returns [`CalplanError::Format`] if the document contains no delimiter
/// at all: a schedule must have at least one day section.
pub fn split_sections(text: &str) -> Result<SplitDocument, CalplanError> {
    let mut header_lines = Vec::new();
    let mut blocks = Vec::new();
    // Lines of the block currently being collected; None while still in
    // the header.
    let mut current: Option<Vec<String>> = None;

    for line in text.lines() {
        if is_delimiter(line) {
            if let Some(lines) = current.take() {
                blocks.push(trim_block(lines));
            }
            current = Some(Vec::new());
        } else if let Some(lines) = current.as_mut() {
            lines.push(line.trim_end().to_string());
        } else {
            header_lines.push(line.to_string());
        }
    }

    match current {
        Some(lines) => blocks.push(trim_block(lines)),
        None => {
            return Err(CalplanError::format(
                text.lines().count().max(1),
                "no section delimiter found; a schedule needs at least one \
                 day section introduced by a line of 3 or more dashes",
            ));
        }
    }

    Ok(SplitDocument {
        header_lines,
        blocks,
    })
}

/// Drop leading and trailing blank lines of a block.
fn trim_block(mut lines: Vec<String>) -> ContentBlock {
    while lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    ContentBlock { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delimiter() {
        assert!(is_delimiter("---"));
        assert!(is_delimiter("----------"));
        assert!(is_delimiter("  ---  "));
        assert!(!is_delimiter("--"));
        assert!(!is_delimiter("--- header ---"));
        assert!(!is_delimiter("- - -"));
        assert!(!is_delimiter(""));
    }

    #[test]
    fn test_split_two_blocks() {
        let doc = split_sections("Start: 2020-03-09\n---\nFirst day\n---\nSecond day\n").unwrap();

        assert_eq!(doc.header_lines, vec!["Start: 2020-03-09"]);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].lines, vec!["First day"]);
        assert_eq!(doc.blocks[1].lines, vec!["Second day"]);
    }

    #[test]
    fn test_blank_edges_trimmed_inner_blanks_kept() {
        let doc = split_sections("head\n---\n\nFirst line\n\nSecond line\n\n\n").unwrap();

        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].lines, vec!["First line", "", "Second line"]);
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        let doc = split_sections("head\n---\nTopic   \n  indented   \n").unwrap();
        assert_eq!(doc.blocks[0].lines, vec!["Topic", "  indented"]);
    }

    #[test]
    fn test_empty_block_still_counts() {
        let doc = split_sections("head\n---\n\n---\ncontent\n").unwrap();

        assert_eq!(doc.blocks.len(), 2);
        assert!(doc.blocks[0].is_empty());
        assert_eq!(doc.blocks[1].lines, vec!["content"]);
    }

    #[test]
    fn test_zero_delimiters_is_format_error() {
        let err = split_sections("Start: 2020-03-09\nEnd: 2020-03-13\n").unwrap_err();
        assert!(matches!(err, CalplanError::Format { .. }));
        assert!(err.to_string().contains("no section delimiter"));
    }

    #[test]
    fn test_delimiter_on_last_line_yields_empty_block() {
        let doc = split_sections("head\n---\nday one\n---").unwrap();

        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].lines, vec!["day one"]);
        assert!(doc.blocks[1].is_empty());
    }
}
