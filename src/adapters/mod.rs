//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GitHub REST API changed-file source
//! - `event/` - Runner event file reader
//! - `output/` - Step output file and legacy stdout commands

pub mod event;
pub mod github;
pub mod output;

pub use event::read_event_context;
pub use github::{DEFAULT_API_URL, GitHubClient};
pub use output::{FileOutput, LegacyOutput, output_sink};
