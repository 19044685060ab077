//! Console rendering of run results.
//!
//! Text output is one status line per file (symbol, file name, optional message)
//! and a final summary line. JSON output is the whole [`RunReport`] as one document.

pub mod messages;

pub use messages::Messages;

use crate::models::{FileReport, Outcome, RunReport, RunSummary};
use anyhow::{Context, Result};
use std::io::Write;

const SEPARATOR_WIDTH: usize = 50;

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn symbol(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Updated => "✅",
        Outcome::NoMatch | Outcome::NoMarker => "⚠️ ",
        Outcome::Errored(_) => "❌",
    }
}

/// Formats the status line for one file.
pub fn file_line(messages: &Messages, report: &FileReport, dry_run: bool) -> String {
    match messages.outcome(&report.outcome, dry_run) {
        Some(message) => format!("{} {}: {}", symbol(&report.outcome), report.file, message),
        None => format!("{} {}", symbol(&report.outcome), report.file),
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Writes the closing separator and summary line.
pub fn write_summary<W: Write>(out: &mut W, messages: &Messages, summary: &RunSummary) -> Result<()> {
    writeln!(out, "{}", separator()).context("Failed to write report")?;
    writeln!(out, "{}", messages.summary(summary)).context("Failed to write report")?;
    Ok(())
}

/// Writes the full report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}
