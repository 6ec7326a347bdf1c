//! Business logic services
//!
//! Orchestration logic that operates on domain models. Services never touch
//! the network, files, or environment directly; those arrive through the
//! port traits.
//!
//! - [`matcher`] - Filter changed files against patterns
//! - [`resolver`] - Decide which files the run changed
//! - [`emitter`] - Publish a match result as step outputs

pub mod emitter;
pub mod matcher;
pub mod resolver;

pub use emitter::{OUTPUT_COUNT, OUTPUT_FILES, OUTPUT_MATCHES, emit_result};
pub use matcher::match_files;
pub use resolver::resolve_changed_files;
