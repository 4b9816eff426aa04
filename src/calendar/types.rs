use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::weekday_abbrev;

/// A date excluded from the schedule, with the annotation shown in its
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDate {
    pub date: NaiveDate,
    pub annotation: String,
}

/// Validated header of a schedule file.
///
/// Built once per parse by the header parser and consumed by the schedule
/// expander; not retained in the finished [`Calendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// First date of the schedule range.
    pub start: NaiveDate,
    /// Last date of the schedule range, inclusive. Never before `start`.
    pub end: NaiveDate,
    /// Active weekdays, sorted Monday-first, duplicates collapsed.
    pub weekdays: Vec<Weekday>,
    /// Skip dates in source order, each within `[start, end]`.
    pub skips: Vec<SkipDate>,
}

impl HeaderConfig {
    /// Whether `date` falls on one of the configured weekdays.
    #[must_use]
    pub fn matches_weekday(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }

    /// The annotation for `date`, if it is a skip date.
    #[must_use]
    pub fn skip_annotation(&self, date: NaiveDate) -> Option<&str> {
        self.skips
            .iter()
            .find(|skip| skip.date == date)
            .map(|skip| skip.annotation.as_str())
    }
}

/// The verbatim text lines of one day section, in source order.
///
/// Content is opaque to the parser; only the renderers interpret the
/// target markup conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub lines: Vec<String>,
}

impl ContentBlock {
    /// A block with no content lines. Represents a day with nothing
    /// scheduled; it still occupies one section slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What a schedule entry carries: a regular day with content, or a
/// suppressed day with its annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryKind {
    /// An active day paired with its content block.
    Day { content: ContentBlock },
    /// A skip date; the annotation replaces the day's content.
    Skip { annotation: String },
}

/// One dated entry of the expanded schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl ScheduleEntry {
    /// Whether this entry is an active day (not a skip).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.kind, EntryKind::Day { .. })
    }

    /// The content block, for active entries.
    #[must_use]
    pub const fn content(&self) -> Option<&ContentBlock> {
        match &self.kind {
            EntryKind::Day { content } => Some(content),
            EntryKind::Skip { .. } => None,
        }
    }

    /// The skip annotation, for inactive entries.
    #[must_use]
    pub fn annotation(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Day { .. } => None,
            EntryKind::Skip { annotation } => Some(annotation),
        }
    }
}

/// The expanded schedule: one entry per date in range that matches a
/// configured weekday or is an explicit skip date, strictly increasing by
/// date.
///
/// A calendar is built once by the expander and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    start: NaiveDate,
    end: NaiveDate,
    weekdays: Vec<Weekday>,
    entries: Vec<ScheduleEntry>,
}

impl Calendar {
    pub(crate) fn new(
        start: NaiveDate,
        end: NaiveDate,
        weekdays: Vec<Weekday>,
        entries: Vec<ScheduleEntry>,
    ) -> Self {
        Self {
            start,
            end,
            weekdays,
            entries,
        }
    }

    /// First date of the configured range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the configured range, inclusive.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Configured weekdays, sorted Monday-first.
    #[must_use]
    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    /// All schedule entries, in date order.
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of active (non-skip) entries.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_active()).count()
    }

    /// Number of skip entries.
    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.entries.len() - self.active_count()
    }

    /// Date of the last active entry, if any.
    ///
    /// This is the date the schedule actually finishes on, as opposed to
    /// the configured `end` of the range.
    #[must_use]
    pub fn real_end(&self) -> Option<NaiveDate> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.is_active())
            .map(|e| e.date)
    }

    /// Overall description of the calendar, for the `info` command.
    #[must_use]
    pub fn summary(&self) -> CalendarSummary {
        CalendarSummary {
            start: self.start,
            end: self.end,
            real_end: self.real_end(),
            weekdays: self.weekdays.iter().copied().map(weekday_abbrev).collect(),
            active_days: self.active_count(),
            skip_days: self.skip_count(),
        }
    }
}

/// Headline facts about a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarSummary {
    /// Configured start date.
    pub start: NaiveDate,
    /// Configured end date.
    pub end: NaiveDate,
    /// Date of the last active day, `None` for a calendar of only skips.
    pub real_end: Option<NaiveDate>,
    /// Configured weekday names, Monday-first.
    pub weekdays: Vec<&'static str>,
    /// Number of active days.
    pub active_days: usize,
    /// Number of skip days.
    pub skip_days: usize,
}
