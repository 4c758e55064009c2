//! Core sample parser implementation
//!
//! This module provides the main parser orchestration for both accepted
//! input formats, handling header extraction, per-row record assembly, and
//! format mismatch detection.

use serde_json::Value;
use tracing::{debug, info};

use super::header::{has_usable_headers, normalize_headers};
use super::record_parser::{parse_data_row, parse_json_object};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::InputFormat;
use crate::constants::DELIMITER;
use crate::{Error, Result};

/// Parser for tabular environmental sample input
///
/// Accepts raw text plus a declared format discriminator and produces an
/// ordered record sequence. Malformed input fails with a format error and
/// produces no partial results; data-quality issues inside well-formed input
/// degrade gracefully and are visible in the parse statistics.
#[derive(Debug, Clone)]
pub struct SampleParser {
    delimiter: u8,
}

impl SampleParser {
    /// Create a parser with the standard comma delimiter
    pub fn new() -> Self {
        Self {
            delimiter: DELIMITER,
        }
    }

    /// Create a parser with a custom field delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parse raw input text according to the declared format
    pub fn parse(&self, content: &str, format: InputFormat) -> Result<ParseResult> {
        let result = match format {
            InputFormat::Csv => self.parse_delimited(content),
            InputFormat::Json => self.parse_structured(content),
        }?;

        info!("Parsed {} input: {}", format, result.stats.summary());
        Ok(result)
    }

    /// Parse delimited text with a mandatory header row
    fn parse_delimited(&self, content: &str) -> Result<ParseResult> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(Error::format(
                "delimited input",
                "input is empty: expected a header row",
            ));
        }

        // A JSON document declared as delimited text is a format mismatch,
        // not a one-column dataset
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            return Err(Error::format(
                "delimited input",
                "content looks like JSON: declared format does not match content shape",
            ));
        }

        let mut stats = ParseStats::new();
        // The CSV reader skips empty lines rather than yielding empty
        // records; count them so the skip is observable
        stats.blank_lines_skipped = trimmed.lines().filter(|line| line.is_empty()).count();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(trimmed.as_bytes());

        let headers = normalize_headers(
            reader
                .headers()
                .map_err(|e| Error::format("delimited input", format!("unreadable header row: {}", e)))?,
        );

        if !has_usable_headers(&headers) {
            return Err(Error::format(
                "delimited input",
                "header row carries no usable field names",
            ));
        }
        debug!("Normalized headers: {:?}", headers);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| {
                Error::format("delimited input", format!("unreadable data row: {}", e))
            })?;
            records.push(parse_data_row(&row, &headers, &mut stats));
        }

        stats.records_parsed = records.len();
        Ok(ParseResult { records, stats })
    }

    /// Parse structured hierarchical input: a JSON array of key/value objects
    fn parse_structured(&self, content: &str) -> Result<ParseResult> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::format("structured input", format!("invalid JSON: {}", e)))?;

        let Value::Array(elements) = value else {
            return Err(Error::format(
                "structured input",
                "expected a JSON array of key/value objects",
            ));
        };

        let mut stats = ParseStats::new();
        let mut records = Vec::with_capacity(elements.len());

        for (position, element) in elements.iter().enumerate() {
            let Value::Object(object) = element else {
                return Err(Error::format(
                    "structured input",
                    format!("element {} is not a key/value object", position),
                ));
            };
            records.push(parse_json_object(object, &mut stats));
        }

        stats.records_parsed = records.len();
        Ok(ParseResult { records, stats })
    }
}

impl Default for SampleParser {
    fn default() -> Self {
        Self::new()
    }
}
