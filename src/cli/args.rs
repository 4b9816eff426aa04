use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "calplan")]
#[command(about = "Render dashed-section schedule files into markup calendars")]
#[command(long_about = "calplan - a schedule file renderer

Parses schedule files - a header giving the date range, active weekdays
and skip dates, followed by one dashed-delimited section per day - and
renders them as reStructuredText or Markdown.

FILE FORMAT:
  Start: 2020-03-09
  End: 2020-07-06
  Weekdays: Mon, Fri
  Skip:
  - 2020-04-10: *Holiday: Good Friday*

  ----------------------------------------------------------
  First day

  * Can have multiple lines
  ----------------------------------------------------------
  Second day

QUICK START:
  calplan render schedule.txt            Render to stdout
  calplan render schedule.txt -o cal.rst Render to a file
  calplan check schedule.txt             Validate without rendering
  calplan info schedule.txt              Describe the schedule

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  calplan <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for the diagnostic commands (check, info)
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the diagnostic commands.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Markup target for the render command.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// reStructuredText sections.
    #[default]
    Rst,
    /// Markdown sections.
    Markdown,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a schedule file and render it as markup
    ///
    /// Expands the header's date range into the concrete day-by-day
    /// schedule, pairs each active date with its dashed-delimited section,
    /// and writes the rendered calendar.
    ///
    /// # Examples
    ///
    ///   calplan render schedule.txt
    ///   calplan render schedule.txt --to markdown
    ///   calplan render schedule.txt -o calendar.rst
    ///   cat schedule.txt | calplan render -
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Validate a schedule file without rendering it
    ///
    /// Parses and validates the file, reporting either a short verdict or
    /// the first format/validation error. Exits non-zero on any error, so
    /// it is safe to use in scripts and CI.
    ///
    /// # Examples
    ///
    ///   calplan check schedule.txt
    ///   calplan check schedule.txt --output json
    #[command(alias = "c")]
    Check(CheckArgs),

    /// Describe a schedule file
    ///
    /// Prints the configured range, the real end date (the last day that
    /// actually carries content), the active weekdays, and the day counts.
    ///
    /// # Examples
    ///
    ///   calplan info schedule.txt
    ///   calplan info schedule.txt --output json
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Generate shell completions
    ///
    /// Writes a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   calplan completions bash > /usr/local/etc/bash_completion.d/calplan
    ///   source <(calplan completions zsh)
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// Schedule file to render, or '-' for standard input
    pub file: PathBuf,

    /// Markup target
    #[arg(long, value_enum)]
    pub to: Option<RenderTarget>,

    /// Write the rendered calendar to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Schedule file to validate, or '-' for standard input
    pub file: PathBuf,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Schedule file to describe, or '-' for standard input
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
    pub shell: String,
}
