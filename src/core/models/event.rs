//! CI event context
//!
//! The runner describes the triggering event in a JSON file. The only thing
//! read from it is the pull request number; every way of not getting one is
//! a distinct, non-fatal variant the resolver branches on.

use serde_json::Value;

/// What the event file says about the current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventContext {
    /// No event file was configured
    Absent,
    /// The event parsed but is not a pull request event
    NoPullRequest,
    /// A pull request event with its number
    PullRequest(u64),
    /// The event file could not be used
    Malformed(String),
}

impl EventContext {
    /// Interpret the contents of an event file
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        let event: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => return Self::Malformed(format!("invalid JSON: {e}")),
        };

        let Some(pull_request) = event.get("pull_request") else {
            return Self::NoPullRequest;
        };

        match pull_request.get("number") {
            Some(number) => number.as_u64().map_or_else(
                || Self::Malformed(format!("pull_request.number is not an integer: {number}")),
                Self::PullRequest,
            ),
            None => Self::Malformed("pull_request has no number".to_string()),
        }
    }
}
