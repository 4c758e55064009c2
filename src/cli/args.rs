//! Command-line argument definitions for HMPI processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::InputFormat;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the HMPI processor
///
/// Computes the Heavy Metal Pollution Index for environmental sample
/// datasets ingested from CSV or JSON files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hmpi-processor",
    version,
    about = "Compute the Heavy Metal Pollution Index for environmental sample datasets",
    long_about = "Processes tabular environmental sample data (site location plus measured \
                  heavy-metal concentrations) into a classified dataset: each sample gets a \
                  normalized pollution index and a severity tier (Safe, Moderate, Unsafe) \
                  derived from configurable regulatory limits. Accepts CSV and JSON input \
                  and exports results as delimited text."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the HMPI processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a sample dataset and report classified results (main command)
    Process(ProcessArgs),
    /// Check a sample dataset for format and data quality issues
    Validate(ValidateArgs),
    /// Write the bundled sample dataset for trying the processor out
    Sample(SampleArgs),
}

/// Arguments for the process command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input file containing sample data (CSV with a header row, or a JSON
    /// array of objects)
    #[arg(value_name = "INPUT", help = "Input sample dataset (CSV or JSON)")]
    pub input: PathBuf,

    /// Input format override
    ///
    /// If not specified, the format is inferred from the file extension
    /// (.csv or .json).
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        help = "Input format: csv or json (default: inferred from extension)"
    )]
    pub format: Option<InputFormat>,

    /// Path to a custom pollutant limits file
    ///
    /// JSON array of {"pollutant": name, "limit": value} entries. If not
    /// specified, the default limits are used (Lead 0.01, Cadmium 0.003,
    /// Arsenic 0.01).
    #[arg(
        short = 'l',
        long = "limits",
        value_name = "FILE",
        help = "Custom pollutant limits file (JSON)"
    )]
    pub limits_file: Option<PathBuf>,

    /// Export the classified dataset as delimited text
    #[arg(
        short = 'e',
        long = "export",
        value_name = "FILE",
        help = "Write the classified dataset to a CSV file"
    )]
    pub export_path: Option<PathBuf>,

    /// Output format for results on stdout
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command (parse-only dry run)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input file to check (CSV with a header row, or a JSON array of objects)
    #[arg(value_name = "INPUT", help = "Input sample dataset (CSV or JSON)")]
    pub input: PathBuf,

    /// Input format override
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        help = "Input format: csv or json (default: inferred from extension)"
    )]
    pub format: Option<InputFormat>,

    /// Path to a custom pollutant limits file
    #[arg(
        short = 'l',
        long = "limits",
        value_name = "FILE",
        help = "Custom pollutant limits file (JSON)"
    )]
    pub limits_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the sample command (bundled dataset writer)
#[derive(Debug, Clone, Parser)]
pub struct SampleArgs {
    /// Output path for the sample dataset
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the sample dataset (default: sample_hmpi.csv)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

/// Output format options for process results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable result table and summary
    Human,
    /// JSON array of enriched records for scripting
    Json,
    /// Delimited text in the export format
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Validate that an input file exists and resolve its declared format
fn validate_input(input: &PathBuf, format: Option<InputFormat>) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }

    if format.is_none() && InputFormat::from_path(input).is_none() {
        return Err(Error::configuration(format!(
            "Cannot infer input format from '{}': use --format csv|json",
            input.display()
        )));
    }

    Ok(())
}

/// Validate that a limits file exists when specified
fn validate_limits_file(limits_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = limits_file {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Limits file does not exist: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input, self.format)?;
        validate_limits_file(self.limits_file.as_ref())?;

        // Validate export directory exists if specified
        if let Some(export_path) = &self.export_path {
            if let Some(parent) = export_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Export directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve the effective input format (explicit flag wins over extension)
    pub fn resolved_format(&self) -> Result<InputFormat> {
        resolve_format(self.format, &self.input)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input, self.format)?;
        validate_limits_file(self.limits_file.as_ref())
    }

    /// Resolve the effective input format (explicit flag wins over extension)
    pub fn resolved_format(&self) -> Result<InputFormat> {
        resolve_format(self.format, &self.input)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Resolve an effective input format from an optional override and the path
fn resolve_format(format: Option<InputFormat>, input: &PathBuf) -> Result<InputFormat> {
    format
        .or_else(|| InputFormat::from_path(input))
        .ok_or_else(|| {
            Error::configuration(format!(
                "Cannot infer input format from '{}': use --format csv|json",
                input.display()
            ))
        })
}
