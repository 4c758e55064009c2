//! Command implementations for HMPI processor CLI
//!
//! This module contains the main command execution logic and result
//! reporting for the CLI interface. Each command is implemented in its own
//! module.

pub mod process;
pub mod sample;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for HMPI processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: full pipeline run with result reporting and optional export
/// - `validate`: parse-only dry run with data quality findings
/// - `sample`: bundled sample dataset writer
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Sample(sample_args) => sample::run_sample(sample_args).await,
    }
}
