//! Change-set resolver - decides which files the current run changed
//!
//! Resolution order:
//!
//! 1. A pull request event lists the pull request's files.
//! 2. Otherwise the base and head refs are compared.
//! 3. Without a head ref there is nothing to compare and the change-set is
//!    empty.
//!
//! Upstream failures never escape: they are logged and the change-set is
//! empty.

use crate::core::models::{EventContext, RefSpec};
use crate::core::ports::{ChangeSource, UpstreamError};

/// Resolve the changed files for `repo`
#[must_use]
pub fn resolve_changed_files(
    source: &dyn ChangeSource,
    repo: &str,
    refs: &RefSpec,
    event: &EventContext,
) -> Vec<String> {
    match try_resolve(source, repo, refs, event) {
        Ok(files) => files,
        Err(e) => {
            log::error!("GitHub API error: {e}");
            Vec::new()
        },
    }
}

fn try_resolve(
    source: &dyn ChangeSource,
    repo: &str,
    refs: &RefSpec,
    event: &EventContext,
) -> Result<Vec<String>, UpstreamError> {
    let repository = source.repository(repo)?;
    log::debug!("Resolving changed files for {}", repository.full_name);

    match event {
        EventContext::PullRequest(number) => {
            log::info!("Listing files of pull request #{number}");
            return source.pull_request_files(repo, *number);
        },
        EventContext::Malformed(reason) => {
            log::debug!("Ignoring event file: {reason}");
        },
        EventContext::Absent | EventContext::NoPullRequest => {},
    }

    let base = refs.base();
    let Some(head) = refs.head() else {
        log::warn!("Could not determine changed files: no head ref available");
        return Ok(Vec::new());
    };

    log::info!("Comparing {base}...{head}");
    source.compare_files(repo, base, head)
}
