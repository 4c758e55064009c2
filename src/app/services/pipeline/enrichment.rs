//! Per-record enrichment: presentation defaulting, index computation, and
//! classification
//!
//! All presentation-field defaulting lives in one explicit table here
//! rather than being scattered across record construction. Note that the
//! displayed concentration default (0.0 on the enriched record) and the
//! index contribution default (zero contribution inside the calculator) are
//! two independent rules; the per-pollutant [`ConcentrationFlag`] keeps a
//! defaulted zero distinguishable from a measured zero for auditing.

use std::collections::HashMap;
use tracing::debug;

use super::stats::PipelineStats;
use crate::app::models::{CellValue, ConcentrationFlag, EnrichedRecord, RawRecord};
use crate::app::services::{classifier, index_calculator};
use crate::config::PollutantLimits;
use crate::constants::{fields, UNKNOWN_LOCATION};

/// Coercion rule for one presentation field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Coerce to display text; fall back to a sentinel when the value is
    /// absent or blank
    TextOrSentinel(&'static str),

    /// Keep a numeric value; leave the field empty otherwise
    OptionalNumber,
}

/// The presentation fields and their defaulting rules, applied once during
/// enrichment
pub const PRESENTATION_FIELDS: &[(&str, FieldRule)] = &[
    (fields::LOCATION, FieldRule::TextOrSentinel(UNKNOWN_LOCATION)),
    (fields::LATITUDE, FieldRule::OptionalNumber),
    (fields::LONGITUDE, FieldRule::OptionalNumber),
];

/// Look up the configured rule for a presentation field
fn rule_for(field: &str) -> Option<FieldRule> {
    PRESENTATION_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, rule)| *rule)
}

/// Resolve a text presentation field per its configured rule
///
/// A numeric cell is rendered as text (a site labeled "117" is a valid
/// name); a blank or absent cell falls back to the sentinel.
pub fn resolve_display_text(record: &RawRecord, field: &str) -> String {
    let sentinel = match rule_for(field) {
        Some(FieldRule::TextOrSentinel(sentinel)) => sentinel,
        _ => UNKNOWN_LOCATION,
    };

    match record.get(field) {
        Some(CellValue::Number(value)) => value.to_string(),
        Some(CellValue::Text(text)) if !text.trim().is_empty() => text.clone(),
        _ => sentinel.to_string(),
    }
}

/// Resolve a coordinate presentation field per its configured rule
pub fn resolve_coordinate(record: &RawRecord, field: &str) -> Option<f64> {
    debug_assert_eq!(rule_for(field), Some(FieldRule::OptionalNumber));
    record.numeric(field)
}

/// Enrich one raw record with defaults, index, and tier
pub fn enrich_record(
    record: &RawRecord,
    limits: &PollutantLimits,
    stats: &mut PipelineStats,
) -> EnrichedRecord {
    let location = resolve_display_text(record, fields::LOCATION);
    let latitude = resolve_coordinate(record, fields::LATITUDE);
    let longitude = resolve_coordinate(record, fields::LONGITUDE);

    let mut concentrations = HashMap::with_capacity(limits.len());
    let mut concentration_flags = HashMap::with_capacity(limits.len());

    for pollutant in limits.pollutants() {
        let (value, flag) = match record.get(pollutant) {
            Some(CellValue::Number(value)) => (*value, ConcentrationFlag::Measured),
            Some(CellValue::Text(text)) => {
                debug!(
                    "Record '{}': non-numeric {} value '{}' displayed as 0",
                    location, pollutant, text
                );
                (0.0, ConcentrationFlag::NonNumeric)
            }
            None => {
                debug!("Record '{}': {} column absent, displayed as 0", location, pollutant);
                (0.0, ConcentrationFlag::Missing)
            }
        };

        if flag.is_warning() {
            stats.quality_warnings += 1;
        }
        concentrations.insert(pollutant.to_string(), value);
        concentration_flags.insert(pollutant.to_string(), flag);
    }

    let index = index_calculator::compute_index(record, limits);
    let tier = classifier::classify(index);
    stats.tally_tier(tier);

    EnrichedRecord {
        location,
        latitude,
        longitude,
        concentrations,
        concentration_flags,
        index,
        tier,
        tier_color: tier.color(),
    }
}
