//! Pipeline statistics and result structures
//!
//! This module provides types for tracking enrichment outcomes, tier
//! distribution, and data quality events across one pipeline run.

use crate::app::models::{EnrichedRecord, Tier};
use crate::app::services::sample_parser::ParseStats;

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PipelineStats {
    /// Number of raw records produced by the parser
    pub records_ingested: usize,

    /// Number of enriched records emitted (always equals records_ingested
    /// on success; enrichment never drops records)
    pub records_enriched: usize,

    /// Number of defaulted pollutant values across all records
    pub quality_warnings: usize,

    /// Records classified Safe
    pub safe_count: usize,

    /// Records classified Moderate
    pub moderate_count: usize,

    /// Records classified Unsafe
    pub unsafe_count: usize,

    /// Records with a non-finite index
    pub undetermined_count: usize,

    /// Cell-level statistics from the parsing stage
    pub parse: ParseStats,
}

impl PipelineStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified tier in the distribution tally
    pub fn tally_tier(&mut self, tier: Tier) {
        match tier {
            Tier::Safe => self.safe_count += 1,
            Tier::Moderate => self.moderate_count += 1,
            Tier::Unsafe => self.unsafe_count += 1,
            Tier::Undetermined => self.undetermined_count += 1,
        }
    }

    /// Get the tally for one tier
    pub fn tier_count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Safe => self.safe_count,
            Tier::Moderate => self.moderate_count,
            Tier::Unsafe => self.unsafe_count,
            Tier::Undetermined => self.undetermined_count,
        }
    }

    /// Check the count-preservation invariant: one enriched record per
    /// ingested record
    pub fn is_complete(&self) -> bool {
        self.records_enriched == self.records_ingested
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Pipeline summary: {} -> {} records | Safe: {} | Moderate: {} | Unsafe: {} | \
             Undetermined: {} | Quality warnings: {}",
            self.records_ingested,
            self.records_enriched,
            self.safe_count,
            self.moderate_count,
            self.unsafe_count,
            self.undetermined_count,
            self.quality_warnings
        )
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Enriched records, in input order
    pub records: Vec<EnrichedRecord>,

    /// Pipeline statistics
    pub stats: PipelineStats,
}

impl PipelineResult {
    /// Create a new pipeline result
    pub fn new(records: Vec<EnrichedRecord>, stats: PipelineStats) -> Self {
        Self { records, stats }
    }

    /// Number of enriched records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Highest index in the dataset, if any record is present and finite
    pub fn max_index(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|record| record.index)
            .filter(|index| index.is_finite())
            .fold(None, |max, index| match max {
                Some(current) if current >= index => Some(current),
                _ => Some(index),
            })
    }
}
