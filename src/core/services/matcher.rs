//! File matcher service - filters changed files against patterns
//!
//! This module contains pure matching logic with no I/O dependencies.

use crate::core::models::{MatchMode, MatchResult, PatternSet};

/// Filter `files` against `patterns`
///
/// Each file is checked against the patterns in order and the first match
/// decides it, so a file appears at most once no matter how many patterns
/// hit it. Output keeps the input order and any duplicates the input had.
///
/// An empty pattern set matches nothing, in either mode.
///
/// # Examples
///
/// ```
/// use file_filter::core::models::{MatchMode, parse_patterns};
/// use file_filter::core::services::match_files;
///
/// let files = vec!["src/main.py".to_string(), "package.json".to_string()];
/// let patterns = parse_patterns("*.py").unwrap();
/// let result = match_files(&files, &patterns, MatchMode::Include);
/// assert_eq!(result.files(), ["src/main.py"]);
/// ```
#[must_use]
pub fn match_files(files: &[String], patterns: &PatternSet, mode: MatchMode) -> MatchResult {
    if patterns.is_empty() {
        return MatchResult::default();
    }

    let matched = files
        .iter()
        .filter(|file| {
            let hit = patterns.first_match(file);
            if let Some(pattern) = hit {
                log::trace!("{file} matched {pattern}");
            }
            mode.keeps(hit.is_some())
        })
        .cloned()
        .collect();

    MatchResult::new(matched)
}
