//! Step output adapters
//!
//! - [`FileOutput`] appends `name=value` lines to the runner's output file
//!   (`GITHUB_OUTPUT`), reopening it for every write.
//! - [`LegacyOutput`] prints the deprecated `::set-output` workflow command
//!   for runners that do not provide an output file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::ports::{OutputError, OutputSink};

/// Appends outputs to a file
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    /// Create a sink appending to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        let to_err = |source| OutputError::File {
            path: self.path.clone(),
            source,
        };

        let mut file =
            OpenOptions::new().create(true).append(true).open(&self.path).map_err(to_err)?;
        writeln!(file, "{name}={value}").map_err(to_err)
    }
}

/// Writes `::set-output name=<name>::<value>` commands
#[derive(Debug)]
pub struct LegacyOutput<W> {
    writer: W,
}

impl<W: Write> LegacyOutput<W> {
    /// Create a sink writing commands to `writer`
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LegacyOutput<io::Stdout> {
    /// Create a sink writing commands to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for LegacyOutput<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        writeln!(self.writer, "::set-output name={name}::{value}").map_err(OutputError::Stream)?;
        self.writer.flush().map_err(OutputError::Stream)
    }
}

/// Pick the sink for the configured output file
///
/// Without an output file, falls back to the legacy stdout command.
#[must_use]
pub fn output_sink(path: Option<&Path>) -> Box<dyn OutputSink> {
    match path {
        Some(path) => Box::new(FileOutput::new(path)),
        None => {
            log::debug!("No output file configured, using legacy set-output commands");
            Box::new(LegacyOutput::stdout())
        },
    }
}
