use colored::Colorize;

use crate::calendar::CalendarSummary;

/// Format a calendar summary as pretty output for the `info` command.
#[must_use]
pub fn format_summary_pretty(summary: &CalendarSummary) -> String {
    let mut output = format!(
        "Calendar {} to {}\n",
        summary.start.to_string().bold(),
        summary.end.to_string().bold()
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!("  {}: {}\n", "Start".dimmed(), summary.start));
    output.push_str(&format!("  {}: {}\n", "Expected end".dimmed(), summary.end));
    match summary.real_end {
        Some(real_end) => {
            output.push_str(&format!("  {}: {}\n", "Real end".dimmed(), real_end));
        }
        None => {
            output.push_str(&format!("  {}: none (no active days)\n", "Real end".dimmed()));
        }
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Weekdays".dimmed(),
        summary.weekdays.join(", ")
    ));
    output.push_str(&format!(
        "  {}: {} active, {} skipped\n",
        "Days".dimmed(),
        summary.active_days.to_string().green(),
        summary.skip_days.to_string().yellow()
    ));

    output
}

/// Format the one-line verdict for the `check` command.
#[must_use]
pub fn format_check_pretty(summary: &CalendarSummary) -> String {
    format!(
        "{} schedule is valid: {} active day(s), {} skip(s), {} to {}",
        "✓".green().bold(),
        summary.active_days,
        summary.skip_days,
        summary.start,
        summary.end
    )
}
