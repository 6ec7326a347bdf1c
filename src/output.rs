//! Run summary formatting for human and JSON modes
//!
//! The summary is for people reading the job log. The pipeline itself reads
//! the step outputs, which are written separately.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{MatchMode, MatchResult};

/// Output mode for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of one filter run
#[derive(Debug, Serialize)]
pub struct FilterReport {
    /// Patterns in input order
    pub patterns: Vec<String>,
    /// Whether matched or unmatched files were kept
    pub mode: MatchMode,
    /// Number of files in the change-set
    pub changed: usize,
    /// Files kept by the filter
    pub files: MatchResult,
    /// Whether any file was kept
    pub matches: bool,
    /// Number of files kept
    pub count: usize,
}

impl FilterReport {
    /// Build a report from the run's inputs and result
    #[must_use]
    pub fn new(patterns: Vec<String>, mode: MatchMode, changed: usize, files: MatchResult) -> Self {
        Self {
            patterns,
            mode,
            changed,
            matches: files.matches(),
            count: files.count(),
            files,
        }
    }

    /// Write the report to `out` based on output mode
    pub fn render<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.to_human()),
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)
            },
        }
    }

    /// The human-readable report text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Parsed patterns: {}", self.patterns.join(" ")));
        if self.mode == MatchMode::Exclude {
            lines.push("Mode: exclude (keeping files that match no pattern)".to_string());
        }
        lines.push(format!("Changed files: {}", self.changed));

        if self.matches {
            lines.push(format!("Matched files ({}):", self.count));
            for file in self.files.files() {
                lines.push(format!("  {}", file.green()));
            }
        } else {
            lines.push("Matched files: none".dimmed().to_string());
        }

        lines.push(format!("Has matches: {}", self.matches));
        lines.join("\n")
    }
}
