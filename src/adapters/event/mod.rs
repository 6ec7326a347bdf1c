//! Event file adapter
//!
//! Reads the runner's event payload (`GITHUB_EVENT_PATH`) into an
//! [`EventContext`]. A missing or unreadable file is reported as
//! [`EventContext::Malformed`], never as an error.

use std::fs;
use std::path::Path;

use crate::core::models::EventContext;

/// Load the event context from the configured event file, if any
#[must_use]
pub fn read_event_context(path: Option<&Path>) -> EventContext {
    let Some(path) = path else {
        return EventContext::Absent;
    };

    match fs::read_to_string(path) {
        Ok(text) => EventContext::from_json(&text),
        Err(e) => EventContext::Malformed(format!("cannot read {}: {e}", path.display())),
    }
}
