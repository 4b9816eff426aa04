//! Command implementations for calplan.
//!
//! Each CLI subcommand maps to one function here returning the text to
//! print; the binary is responsible for printing and for the exit code.

mod completions;

pub use completions::completions;

use std::io::Read;
use std::path::Path;

use crate::calendar;
use crate::cli::args::{OutputFormat, RenderArgs, RenderTarget};
use crate::error::CalplanError;
use crate::output::{format_check, format_summary, render_calendar};

/// Execute the render command.
///
/// Returns the rendered markup, or an empty string when `--out` was given
/// and the calendar was written to a file.
///
/// # Errors
///
/// Returns an error if the input cannot be read, fails to parse, or the
/// output file cannot be written.
pub fn render(args: &RenderArgs, target: RenderTarget) -> Result<String, CalplanError> {
    let source = read_source(&args.file)?;
    let calendar = calendar::parse(&source)?;
    let rendered = render_calendar(&calendar, target);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| io_with_path(path, &e))?;
            Ok(String::new())
        }
        // The binary prints with a trailing newline of its own.
        None => Ok(rendered.trim_end_matches('\n').to_string()),
    }
}

/// Execute the check command: parse only, report the verdict.
///
/// # Errors
///
/// Returns the parse or validation error for invalid schedules, which the
/// binary converts into a non-zero exit.
pub fn check(file: &Path, format: OutputFormat) -> Result<String, CalplanError> {
    let source = read_source(file)?;
    let calendar = calendar::parse(&source)?;
    format_check(&calendar.summary(), format)
}

/// Execute the info command: parse and describe the schedule.
///
/// # Errors
///
/// Returns an error if the input cannot be read or fails to parse.
pub fn info(file: &Path, format: OutputFormat) -> Result<String, CalplanError> {
    let source = read_source(file)?;
    let calendar = calendar::parse(&source)?;
    format_summary(&calendar.summary(), format)
}

/// Read a schedule document from a file path, or stdin for `-`.
fn read_source(path: &Path) -> Result<String, CalplanError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|e| io_with_path(path, &e))
    }
}

/// Attach the offending path to an I/O error.
fn io_with_path(path: &Path, error: &std::io::Error) -> CalplanError {
    CalplanError::Io(std::io::Error::new(
        error.kind(),
        format!("{}: {error}", path.display()),
    ))
}
