//! Result emitter - publishes a match result as step outputs

use crate::core::models::MatchResult;
use crate::core::ports::{OutputError, OutputSink};

/// Output holding `"true"` or `"false"`
pub const OUTPUT_MATCHES: &str = "matches";
/// Output holding the decimal match count
pub const OUTPUT_COUNT: &str = "count";
/// Output holding the JSON array of matched files
pub const OUTPUT_FILES: &str = "files";

/// Write the `matches`, `count`, and `files` outputs
pub fn emit_result(sink: &mut dyn OutputSink, result: &MatchResult) -> Result<(), OutputError> {
    let files = result.files_json()?;
    sink.set_output(OUTPUT_MATCHES, if result.matches() { "true" } else { "false" })?;
    sink.set_output(OUTPUT_COUNT, &result.count().to_string())?;
    sink.set_output(OUTPUT_FILES, &files)
}
