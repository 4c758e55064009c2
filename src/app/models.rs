//! Data models for HMPI processing
//!
//! This module contains the core data structures for representing raw sample
//! records, computed pollution indexes, and severity classifications.

use crate::constants::{tier_colors, CSV_EXTENSION, JSON_EXTENSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// Cell Values and Raw Records
// =============================================================================

/// A single cell value from tabular input
///
/// Input cells are opportunistically typed: a cell that parses as a finite
/// number is `Number`, anything else is kept verbatim as `Text`. Representing
/// the two cases explicitly forces every consumer to handle both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell content
    Number(f64),

    /// Textual cell content, preserved verbatim (trimmed)
    Text(String),
}

impl CellValue {
    /// Get the numeric value, if this cell is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    /// Get the text content, if this cell is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(text) => Some(text),
        }
    }

    /// Check if this cell holds a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// A uniform field-name-to-value record produced directly from input
///
/// The field set is whatever headers/keys were present in the source; it is
/// not fixed. A short delimited row simply yields fewer fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, CellValue>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from an existing field map
    pub fn from_fields(fields: HashMap<String, CellValue>) -> Self {
        Self { fields }
    }

    /// Insert a field value, replacing any previous value for the name
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Get a field's numeric value, if present and numeric
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(CellValue::as_number)
    }

    /// Check whether the record carries a field with this name
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate field names (unordered)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

// =============================================================================
// Input Format Discriminator
// =============================================================================

/// Declared format of raw input handed to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Comma-separated text with a mandatory header row
    Csv,

    /// JSON array of key/value objects, no header row
    Json,
}

impl InputFormat {
    /// Infer the input format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
        {
            Some(ext) if ext == CSV_EXTENSION => Some(InputFormat::Csv),
            Some(ext) if ext == JSON_EXTENSION => Some(InputFormat::Json),
            _ => None,
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(Error::configuration(format!(
                "Unknown input format '{}': expected 'csv' or 'json'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

// =============================================================================
// Severity Tiers
// =============================================================================

/// Discrete severity classification derived from the pollution index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Index at or below 1: within regulatory limits on average
    Safe,

    /// Index above 1 and at or below 2: elevated contamination
    Moderate,

    /// Index above 2: severe contamination
    Unsafe,

    /// Index was not a finite number; no metal contributed a valid value
    Undetermined,
}

impl Tier {
    /// Fixed display color for this tier
    pub fn color(self) -> &'static str {
        match self {
            Tier::Safe => tier_colors::SAFE,
            Tier::Moderate => tier_colors::MODERATE,
            Tier::Unsafe => tier_colors::UNSAFE,
            Tier::Undetermined => tier_colors::UNDETERMINED,
        }
    }

    /// Human-readable tier label, as used in exports
    pub fn label(self) -> &'static str {
        match self {
            Tier::Safe => "Safe",
            Tier::Moderate => "Moderate",
            Tier::Unsafe => "Unsafe",
            Tier::Undetermined => "Undetermined",
        }
    }

    /// All tier values in ascending severity order
    pub fn all_values() -> [Tier; 4] {
        [Tier::Safe, Tier::Moderate, Tier::Unsafe, Tier::Undetermined]
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Safe" => Ok(Tier::Safe),
            "Moderate" => Ok(Tier::Moderate),
            "Unsafe" => Ok(Tier::Unsafe),
            "Undetermined" => Ok(Tier::Undetermined),
            other => Err(Error::data_validation(format!(
                "Invalid tier label '{}': must be Safe, Moderate, Unsafe or Undetermined",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Data Quality Flags
// =============================================================================

/// Per-pollutant data quality flag recorded during enrichment
///
/// Distinguishes a measured zero from a defaulted zero: both compute
/// identically in the index, but stay distinguishable for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcentrationFlag {
    /// A numeric concentration was present in the input
    Measured,

    /// The pollutant column was absent from the record
    Missing,

    /// The pollutant column was present but not numeric
    NonNumeric,
}

impl ConcentrationFlag {
    /// Check if this flag represents a data quality warning
    pub fn is_warning(self) -> bool {
        !matches!(self, ConcentrationFlag::Measured)
    }

    /// Human-readable description of this flag
    pub fn description(self) -> &'static str {
        match self {
            ConcentrationFlag::Measured => "measured value present",
            ConcentrationFlag::Missing => "column absent, defaulted to 0",
            ConcentrationFlag::NonNumeric => "non-numeric value, defaulted to 0",
        }
    }
}

// =============================================================================
// Enriched Record Structure
// =============================================================================

/// A raw record augmented with computed index and tier
///
/// Canonical output of the core pipeline, consumed read-only by all
/// presentation collaborators (tables, charts, dashboards, export).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    /// Sample site name ("Unknown" when the input carried none)
    pub location: String,

    /// Site latitude, if a numeric value was present
    pub latitude: Option<f64>,

    /// Site longitude, if a numeric value was present
    pub longitude: Option<f64>,

    /// Concentration per configured pollutant (0.0 when absent or non-numeric)
    pub concentrations: HashMap<String, f64>,

    /// Data quality flag per configured pollutant
    pub concentration_flags: HashMap<String, ConcentrationFlag>,

    /// Normalized pollution index, rounded to two decimals
    pub index: f64,

    /// Severity tier, a pure function of the index
    pub tier: Tier,

    /// Display color for the tier
    pub tier_color: &'static str,
}

impl EnrichedRecord {
    /// Get the concentration recorded for a configured pollutant
    pub fn concentration(&self, pollutant: &str) -> Option<f64> {
        self.concentrations.get(pollutant).copied()
    }

    /// Get the data quality flag for a configured pollutant
    pub fn concentration_flag(&self, pollutant: &str) -> Option<ConcentrationFlag> {
        self.concentration_flags.get(pollutant).copied()
    }

    /// Check whether any configured pollutant was defaulted
    pub fn has_quality_warnings(&self) -> bool {
        self.concentration_flags
            .values()
            .any(|flag| flag.is_warning())
    }

    /// Count of defaulted pollutant values on this record
    pub fn quality_warning_count(&self) -> usize {
        self.concentration_flags
            .values()
            .filter(|flag| flag.is_warning())
            .count()
    }
}
