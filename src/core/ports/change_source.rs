//! Changed-file source port
//!
//! Defines the interface to the repository metadata service that knows which
//! files a pull request or a ref comparison touched.

use thiserror::Error;

use crate::core::models::Repository;

/// Failures talking to the metadata source
///
/// These never abort a run: the resolver logs them and reports no changes.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request could not be sent or the connection failed
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error
        message: String,
    },

    /// The service answered with a non-success status
    #[error("{url} returned HTTP {status}: {message}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Message from the response body, if any
        message: String,
    },

    /// The response body was not what the endpoint documents
    #[error("unexpected response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Decoding error
        message: String,
    },
}

/// Repository metadata source
///
/// All file lists are returned in the order the source reports them, without
/// deduplication.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeSource {
    /// Look up a repository by its `owner/name` identifier
    fn repository(&self, repo: &str) -> Result<Repository, UpstreamError>;

    /// List the files changed by a pull request
    fn pull_request_files(&self, repo: &str, number: u64) -> Result<Vec<String>, UpstreamError>;

    /// List the files changed between two references
    fn compare_files(&self, repo: &str, base: &str, head: &str)
    -> Result<Vec<String>, UpstreamError>;
}
