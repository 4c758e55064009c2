//! HMPI Processor Library
//!
//! A Rust library for computing the Heavy Metal Pollution Index (HMPI) of
//! tabular environmental sample data ingested from CSV or JSON input.
//!
//! This library provides tools for:
//! - Parsing delimited text and structured JSON into uniform sample records
//! - Computing a normalized, limit-weighted pollution index per sample
//! - Classifying samples into severity tiers with fixed display colors
//! - Replacing the process-wide dataset atomically for downstream readers
//! - Re-serializing enriched datasets as delimited text for export
//! - Comprehensive error handling with graceful data-quality degradation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod classifier;
        pub mod dataset_store;
        pub mod exporter;
        pub mod index_calculator;
        pub mod pipeline;
        pub mod sample_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, EnrichedRecord, InputFormat, RawRecord, Tier};
pub use config::PollutantLimits;

/// Result type alias for the HMPI processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for HMPI processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input format error: the raw input could not be parsed into at least
    /// one header and zero-or-more data rows, or the declared format does
    /// not match the content shape
    #[error("Format error in {context}: {message}")]
    Format { context: String, message: String },

    /// CSV export error
    #[error("CSV export error: {message}")]
    CsvExport {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error for unparseable input
    pub fn format(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a CSV export error with its underlying cause
    pub fn csv_export(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvExport {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Check whether this error is the non-recoverable format taxonomy
    /// (aborts the pipeline run, leaves the previous dataset untouched)
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            message: "CSV serialization failed".to_string(),
            source: error,
        }
    }
}
