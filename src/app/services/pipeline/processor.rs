//! Main pipeline implementation and orchestration
//!
//! This module contains the [`PipelineProcessor`], which runs the complete
//! ingestion-and-computation pass for one upload: parse the raw input, then
//! compute index and tier for every record in input order.

use tracing::info;

use super::enrichment::enrich_record;
use super::stats::{PipelineResult, PipelineStats};
use crate::app::models::InputFormat;
use crate::app::services::sample_parser::SampleParser;
use crate::config::PollutantLimits;
use crate::Result;

/// Orchestrator for the HMPI computation pipeline
///
/// Composes Parser, Calculator, and Classifier into one synchronous pass.
/// The processor itself is pure: it owns no dataset state, so a failed run
/// can never disturb a previously published dataset.
///
/// # Example
///
/// ```rust
/// use hmpi_processor::app::services::pipeline::PipelineProcessor;
/// use hmpi_processor::app::models::{InputFormat, Tier};
/// use hmpi_processor::config::PollutantLimits;
///
/// # fn example() -> hmpi_processor::Result<()> {
/// let processor = PipelineProcessor::new(PollutantLimits::default());
/// let result = processor.process(
///     "Location,Lead,Cadmium,Arsenic\nSite1,0.02,0.01,0.003",
///     InputFormat::Csv,
/// )?;
///
/// assert_eq!(result.records[0].tier, Tier::Moderate);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PipelineProcessor {
    parser: SampleParser,
    limits: PollutantLimits,
}

impl PipelineProcessor {
    /// Create a processor with the given pollutant limits and the standard
    /// comma-delimited parser
    pub fn new(limits: PollutantLimits) -> Self {
        Self {
            parser: SampleParser::new(),
            limits,
        }
    }

    /// Create a processor with a custom parser
    pub fn with_parser(parser: SampleParser, limits: PollutantLimits) -> Self {
        Self { parser, limits }
    }

    /// Get the pollutant limits used by this processor
    pub fn limits(&self) -> &PollutantLimits {
        &self.limits
    }

    /// Run the full pipeline over one upload
    ///
    /// Parses the raw input per the declared format, then enriches every
    /// record. A format error aborts the run with no partial results; data
    /// quality issues degrade per the defaulting policies and are counted
    /// in the returned statistics.
    pub fn process(&self, content: &str, format: InputFormat) -> Result<PipelineResult> {
        info!(
            "Starting HMPI pipeline ({} input, {} configured pollutants)",
            format,
            self.limits.len()
        );

        let parsed = self.parser.parse(content, format)?;

        let mut stats = PipelineStats::new();
        stats.records_ingested = parsed.records.len();
        stats.parse = parsed.stats;

        let mut records = Vec::with_capacity(parsed.records.len());
        for record in &parsed.records {
            records.push(enrich_record(record, &self.limits, &mut stats));
        }
        stats.records_enriched = records.len();

        info!("{}", stats.summary());
        Ok(PipelineResult::new(records, stats))
    }
}
