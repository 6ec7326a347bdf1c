//! Step output port
//!
//! Defines where named results go so the pipeline can branch on them.

use std::path::PathBuf;

use thiserror::Error;

/// Failures writing step outputs
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be opened or appended to
    #[error("failed to write output file {path}: {source}")]
    File {
        /// Output file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Writing the legacy stdout command failed
    #[error("failed to write output command: {0}")]
    Stream(#[source] std::io::Error),

    /// A value could not be encoded
    #[error("failed to encode output value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value step output destination
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink {
    /// Record one named output
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError>;
}
