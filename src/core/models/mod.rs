//! Domain models for file-filter
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Pattern`] / [`PatternSet`] - Whole-path glob patterns
//! - [`MatchMode`] - Keep matching or non-matching files
//! - [`MatchResult`] - Matched files with derived flag and count
//! - [`EventContext`] - What the CI event file says about the run
//! - [`RefSpec`] - Base/head reference sources
//! - [`Repository`] - Repository identity from the metadata source

mod event;
mod match_mode;
mod match_result;
mod pattern;
mod refs;
mod repository;

pub use event::EventContext;
pub use match_mode::MatchMode;
pub use match_result::MatchResult;
pub use pattern::{Pattern, PatternError, PatternSet, parse_patterns, split_patterns};
pub use refs::{DEFAULT_BASE_REF, RefSpec};
pub use repository::Repository;
