//! Match modes
//!
//! Decides whether the result keeps files that match the patterns or files
//! that match none of them.

use serde::{Deserialize, Serialize};

/// How a file's pattern match maps to inclusion in the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Keep files matching at least one pattern
    #[default]
    Include,
    /// Keep files matching no pattern
    Exclude,
}

impl MatchMode {
    /// Whether a file with the given match outcome is kept
    #[must_use]
    pub const fn keeps(self, matched: bool) -> bool {
        match self {
            Self::Include => matched,
            Self::Exclude => !matched,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}
