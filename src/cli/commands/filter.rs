//! Filter changed files and publish the result

use std::io;

use anyhow::Context;

use file_filter::adapters::{GitHubClient, output_sink, read_event_context};
use file_filter::config::ActionConfig;
use file_filter::core::models::parse_patterns;
use file_filter::core::services::{emit_result, match_files, resolve_changed_files};
use file_filter::output::{FilterReport, OutputMode};

/// Resolve the change-set, filter it, and write the step outputs
pub fn filter(config: &ActionConfig, mode: OutputMode) -> anyhow::Result<()> {
    let patterns = parse_patterns(&config.patterns)?;
    log::debug!("Parsed {} pattern(s)", patterns.len());

    let client = GitHubClient::new(&config.api_url, &config.token)
        .context("failed to create GitHub client")?;
    let event = read_event_context(config.event_path.as_deref());

    let changed = resolve_changed_files(&client, &config.repository, &config.refs, &event);
    let result = match_files(&changed, &patterns, config.mode);

    let report = FilterReport::new(patterns.raw(), config.mode, changed.len(), result);
    // Without an output file, stdout carries the set-output commands
    let rendered = if mode == OutputMode::Json && config.output_path.is_none() {
        report.render(mode, &mut io::stderr().lock())
    } else {
        report.render(mode, &mut io::stdout().lock())
    };
    rendered.context("failed to print run summary")?;

    let mut sink = output_sink(config.output_path.as_deref());
    emit_result(sink.as_mut(), &report.files).context("failed to write step outputs")?;

    Ok(())
}
