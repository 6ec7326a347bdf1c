//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the outside
//! world: the repository metadata API and the runner's output channel.
//!
//! Implementations live in the `adapters` module.
//!
//! The core depends only on these traits, never on concrete implementations,
//! so unit tests can drive it with mocks.

mod change_source;
mod output_sink;

pub use change_source::{ChangeSource, UpstreamError};
pub use output_sink::{OutputError, OutputSink};

#[cfg(test)]
pub use change_source::MockChangeSource;
#[cfg(test)]
pub use output_sink::MockOutputSink;
