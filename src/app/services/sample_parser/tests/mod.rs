//! Comprehensive tests for the sample parser module

pub mod header_tests;
pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::InputFormat;
use crate::app::services::sample_parser::{ParseResult, SampleParser};

/// Two-site CSV fixture matching the bundled sample dataset
pub const TWO_SITE_CSV: &str = "Location,Latitude,Longitude,Lead,Cadmium,Arsenic\n\
                                Site1,20.3,78.2,0.02,0.01,0.003\n\
                                Site2,21.1,77.9,0.03,0.015,0.004";

/// Parse a delimited fixture, panicking on failure
pub fn parse_csv(content: &str) -> ParseResult {
    SampleParser::new()
        .parse(content, InputFormat::Csv)
        .expect("fixture should parse")
}

/// Parse a structured fixture, panicking on failure
pub fn parse_json(content: &str) -> ParseResult {
    SampleParser::new()
        .parse(content, InputFormat::Json)
        .expect("fixture should parse")
}
