//! Comprehensive tests for the pipeline module

pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::{CellValue, InputFormat, RawRecord};
use crate::app::services::pipeline::{PipelineProcessor, PipelineResult};
use crate::config::PollutantLimits;

/// Run the pipeline over delimited input with default limits
pub fn process_csv(content: &str) -> PipelineResult {
    PipelineProcessor::new(PollutantLimits::default())
        .process(content, InputFormat::Csv)
        .expect("fixture should process")
}

/// Build a raw record from (name, value) pairs
pub fn raw_record(fields: &[(&str, CellValue)]) -> RawRecord {
    let mut record = RawRecord::new();
    for (name, value) in fields {
        record.insert(*name, value.clone());
    }
    record
}

/// A fully-measured record for the worked spec scenario (index 1.88)
pub fn moderate_site_record() -> RawRecord {
    raw_record(&[
        ("Location", CellValue::from("Site1")),
        ("Latitude", CellValue::Number(20.3)),
        ("Longitude", CellValue::Number(78.2)),
        ("Lead", CellValue::Number(0.02)),
        ("Cadmium", CellValue::Number(0.01)),
        ("Arsenic", CellValue::Number(0.003)),
    ])
}
