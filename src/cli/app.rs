//! CLI definitions and entry point

use clap::Parser;

use super::commands;
use file_filter::config::ActionConfig;
use file_filter::output::OutputMode;

/// file-filter - Report whether changed files match glob patterns
#[derive(Parser, Debug)]
#[command(
    name = "file-filter",
    version,
    about = "Report whether changed files match glob patterns",
    long_about = "Report whether the files changed by a pull request (or between two refs) \
                  match a set of glob patterns.\n\n\
                  Inputs are read from the environment (INPUT_PATTERNS, INPUT_TOKEN or \
                  GITHUB_TOKEN, GITHUB_REPOSITORY, ...).\n\
                  Results are written as the step outputs matches, count, and files."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ActionConfig::from_env()?;
    log::debug!("{config:?}");

    commands::filter(&config, output_mode)
}
