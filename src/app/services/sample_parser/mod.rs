//! Tabular parser for environmental sample input
//!
//! This module converts raw delimited text or structured JSON input into an
//! ordered sequence of uniform [`RawRecord`](crate::app::models::RawRecord)s
//! for the computation pipeline.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration for both input formats
//! - [`header`] - Header row field-name normalization
//! - [`record_parser`] - Per-cell value coercion and row assembly
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hmpi_processor::app::services::sample_parser::SampleParser;
//! use hmpi_processor::app::models::InputFormat;
//!
//! # fn example() -> hmpi_processor::Result<()> {
//! let parser = SampleParser::new();
//! let result = parser.parse("Location,Lead\nSite1,0.02", InputFormat::Csv)?;
//!
//! assert_eq!(result.records.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::SampleParser;
pub use stats::{ParseResult, ParseStats};
