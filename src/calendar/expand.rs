//! Expanding a header configuration into the concrete day-by-day schedule.

use crate::calendar::types::{Calendar, ContentBlock, EntryKind, HeaderConfig, ScheduleEntry};
use crate::error::CalplanError;

/// Expand a validated header and its day sections into a [`Calendar`].
///
/// Walks every calendar date from start to end inclusive:
/// - a skip date emits an inactive entry with its annotation and consumes
///   no section (skip wins even when the weekday is configured);
/// - a date on a configured weekday emits an active entry consuming the
///   next section in order;
/// - any other date is not part of the schedule at all.
///
/// # Errors
///
/// Returns [`CalplanError::Validation`] when the number of day sections
/// does not match the number of active dates in the range, in either
/// direction.
pub fn expand(config: HeaderConfig, blocks: Vec<ContentBlock>) -> Result<Calendar, CalplanError> {
    let total = blocks.len();
    let mut remaining = blocks.into_iter();
    let mut entries = Vec::new();

    let mut date = config.start;
    loop {
        if let Some(annotation) = config.skip_annotation(date) {
            entries.push(ScheduleEntry {
                date,
                kind: EntryKind::Skip {
                    annotation: annotation.to_string(),
                },
            });
        } else if config.matches_weekday(date) {
            let content = remaining.next().ok_or_else(|| {
                CalplanError::validation(
                    "sections",
                    format!(
                        "block count mismatch: {total} day section(s) but the \
                         schedule reaches another active date, {date}"
                    ),
                )
            })?;
            entries.push(ScheduleEntry {
                date,
                kind: EntryKind::Day { content },
            });
        }

        if date >= config.end {
            break;
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let leftover = remaining.count();
    if leftover > 0 {
        return Err(CalplanError::validation(
            "sections",
            format!(
                "block count mismatch: {total} day section(s) for {} active \
                 date(s); {leftover} section(s) left over",
                total - leftover
            ),
        ));
    }

    Ok(Calendar::new(
        config.start,
        config.end,
        config.weekdays,
        entries,
    ))
}
