//! GitHub REST response shapes
//!
//! Only the fields this tool reads are modelled; everything else in the
//! payloads is ignored.

use serde::Deserialize;

/// One entry of a pull request or comparison file list
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFileEntry {
    /// Repository-relative path
    pub filename: String,
}

/// Body of `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    /// Comparison status (`ahead`, `behind`, `diverged`, `identical`)
    #[serde(default)]
    pub status: Option<String>,
    /// Changed files; absent when the refs are identical
    #[serde(default)]
    pub files: Vec<ChangedFileEntry>,
}

/// Error body GitHub returns with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason
    pub message: String,
}
