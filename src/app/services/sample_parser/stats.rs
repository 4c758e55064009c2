//! Parsing statistics and result structures for sample input
//!
//! This module provides types for tracking cell-level coercion outcomes and
//! organizing parsed results for downstream processing.

use crate::app::models::RawRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records, in input order
    pub records: Vec<RawRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
///
/// Parsing is all-or-nothing (malformed input aborts the run), so these
/// statistics describe cell-level coercion outcomes rather than row-level
/// failures.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of records parsed from the input
    pub records_parsed: usize,

    /// Number of cells coerced to a numeric value
    pub numeric_cells: usize,

    /// Number of cells kept as text
    pub text_cells: usize,

    /// Number of blank input lines skipped (delimited input only)
    pub blank_lines_skipped: usize,

    /// Number of cells beyond the header width that were ignored
    pub excess_cells_ignored: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of cells retained across all records
    pub fn total_cells(&self) -> usize {
        self.numeric_cells + self.text_cells
    }

    /// Fraction of retained cells that coerced to numbers (0.0 when empty)
    pub fn numeric_ratio(&self) -> f64 {
        if self.total_cells() == 0 {
            0.0
        } else {
            self.numeric_cells as f64 / self.total_cells() as f64
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records ({} numeric / {} text cells, {} blank lines skipped, {} excess cells ignored)",
            self.records_parsed,
            self.numeric_cells,
            self.text_cells,
            self.blank_lines_skipped,
            self.excess_cells_ignored
        )
    }
}
