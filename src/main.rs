//! file-filter - report whether a pull request touched files matching glob patterns
//!
//! Runs as a CI step: reads its inputs from the environment, asks the GitHub
//! API which files changed, filters them, and writes the `matches`, `count`,
//! and `files` step outputs. Exits 0 whether or not anything matched, and 1
//! on invalid input or any unexpected failure.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::panic;
use std::process::ExitCode;

/// Main entry point for the file-filter CLI
fn main() -> ExitCode {
    match panic::catch_unwind(cli::run) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
        // The panic hook has already reported the panic on stderr
        Err(_) => ExitCode::FAILURE,
    }
}
