//! Repository identity

use serde::Deserialize;

/// A repository as reported by the metadata source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
}

impl Repository {
    /// Create a repository from its full name
    #[must_use]
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}
