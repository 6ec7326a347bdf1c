//! Action configuration
//!
//! Every input the action reads from the environment is collected here once,
//! at process start, and validated. Nothing else in the crate reads the
//! environment.
//!
//! | Variable | Use |
//! |---|---|
//! | `INPUT_PATTERNS` | Required. Whitespace-separated glob patterns |
//! | `INPUT_TOKEN`, `GITHUB_TOKEN` | Required. API token, first non-empty wins |
//! | `GITHUB_REPOSITORY` | Required. `owner/name`, passed through unchecked |
//! | `INPUT_EXCLUDE` | Optional. `true` keeps files matching no pattern |
//! | `INPUT_BASE_REF`, `INPUT_HEAD_REF` | Optional ref overrides |
//! | `GITHUB_BASE_REF`, `GITHUB_HEAD_REF`, `GITHUB_SHA` | Ref fallbacks |
//! | `GITHUB_EVENT_PATH` | Optional event payload file |
//! | `GITHUB_OUTPUT` | Optional step output file |
//! | `GITHUB_API_URL` | Optional API root, defaults to `https://api.github.com` |
//!
//! Empty values are treated as unset throughout.

use std::path::PathBuf;

use thiserror::Error;

use crate::adapters::github::DEFAULT_API_URL;
use crate::core::models::{MatchMode, RefSpec};

/// Missing or invalid required inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `INPUT_PATTERNS` is unset or empty
    #[error("No patterns provided")]
    MissingPatterns,

    /// Neither `INPUT_TOKEN` nor `GITHUB_TOKEN` is set
    #[error("No GitHub token provided")]
    MissingToken,

    /// `GITHUB_REPOSITORY` is unset or empty
    #[error("No repository name found")]
    MissingRepository,

    /// `INPUT_EXCLUDE` is not `true` or `false`
    #[error("exclude must be one of: true, false (got '{0}')")]
    InvalidExclude(String),
}

/// Validated action inputs
#[derive(Clone)]
pub struct ActionConfig {
    /// Raw pattern text, not yet split
    pub patterns: String,
    /// API token
    pub token: String,
    /// Repository identifier, `owner/name`
    pub repository: String,
    /// Whether matched or unmatched files are reported
    pub mode: MatchMode,
    /// Ref overrides and fallbacks for comparison
    pub refs: RefSpec,
    /// Event payload file
    pub event_path: Option<PathBuf>,
    /// Step output file
    pub output_path: Option<PathBuf>,
    /// API root URL
    pub api_url: String,
}

impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("patterns", &self.patterns)
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("mode", &self.mode)
            .field("refs", &self.refs)
            .field("event_path", &self.event_path)
            .field("output_path", &self.output_path)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ActionConfig {
    /// Read and validate the configuration from the process environment
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read and validate the configuration through `lookup`
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// patterns, token, repository, exclude flag. The repository is not
    /// checked beyond being present; an unknown one fails at the API.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let patterns = get("INPUT_PATTERNS").ok_or(ValidationError::MissingPatterns)?;
        let token = get("INPUT_TOKEN")
            .or_else(|| get("GITHUB_TOKEN"))
            .ok_or(ValidationError::MissingToken)?;
        let repository = get("GITHUB_REPOSITORY").ok_or(ValidationError::MissingRepository)?;

        let mode = match get("INPUT_EXCLUDE").as_deref() {
            None | Some("false") => MatchMode::Include,
            Some("true") => MatchMode::Exclude,
            Some(other) => return Err(ValidationError::InvalidExclude(other.to_string())),
        };

        Ok(Self {
            patterns,
            token,
            repository,
            mode,
            refs: RefSpec {
                base_override: get("INPUT_BASE_REF"),
                head_override: get("INPUT_HEAD_REF"),
                env_base: get("GITHUB_BASE_REF"),
                env_head: get("GITHUB_HEAD_REF"),
                sha: get("GITHUB_SHA"),
            },
            event_path: get("GITHUB_EVENT_PATH").map(PathBuf::from),
            output_path: get("GITHUB_OUTPUT").map(PathBuf::from),
            api_url: get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
