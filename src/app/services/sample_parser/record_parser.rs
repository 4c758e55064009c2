//! Individual record assembly for sample input
//!
//! This module handles the conversion of one delimited data row or one JSON
//! object into a [`RawRecord`], including the opportunistic per-cell numeric
//! coercion.

use csv::StringRecord;
use serde_json::Value;
use tracing::debug;

use super::stats::ParseStats;
use crate::app::models::{CellValue, RawRecord};

/// Coerce a single cell opportunistically
///
/// A cell that parses as a finite floating-point number becomes `Number`;
/// anything else (non-numeric content, the empty string, or a non-finite
/// literal such as "NaN") keeps the trimmed original text. The decision is
/// per-cell, not per-column.
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Text(trimmed.to_string()),
    }
}

/// Assemble a record from one delimited data row
///
/// Cells are matched positionally against the header row. A row with fewer
/// fields than headers yields missing keys for the tail; a row with more
/// fields ignores the excess. Both directions are the documented contract.
pub fn parse_data_row(
    row: &StringRecord,
    headers: &[String],
    stats: &mut ParseStats,
) -> RawRecord {
    let mut record = RawRecord::new();

    for (position, name) in headers.iter().enumerate() {
        let Some(raw) = row.get(position) else {
            // Short row: remaining keys stay absent
            break;
        };

        match parse_cell(raw) {
            CellValue::Number(value) => {
                stats.numeric_cells += 1;
                record.insert(name.clone(), CellValue::Number(value));
            }
            CellValue::Text(text) => {
                stats.text_cells += 1;
                record.insert(name.clone(), CellValue::Text(text));
            }
        }
    }

    let excess = row.len().saturating_sub(headers.len());
    if excess > 0 {
        stats.excess_cells_ignored += excess;
        debug!("Ignored {} excess cells beyond the header width", excess);
    }

    record
}

/// Assemble a record from one JSON object
///
/// JSON typing is trusted as-is: numbers stay numeric, strings stay textual,
/// and a null leaves the key absent. Any other value kind (bool, nested
/// array or object) is stringified to text and logged as a quality event.
pub fn parse_json_object(
    object: &serde_json::Map<String, Value>,
    stats: &mut ParseStats,
) -> RawRecord {
    let mut record = RawRecord::new();

    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::Number(number) => match number.as_f64() {
                Some(value) => {
                    stats.numeric_cells += 1;
                    record.insert(key.clone(), CellValue::Number(value));
                }
                None => {
                    stats.text_cells += 1;
                    record.insert(key.clone(), CellValue::Text(number.to_string()));
                }
            },
            Value::String(text) => {
                stats.text_cells += 1;
                record.insert(key.clone(), CellValue::Text(text.clone()));
            }
            other => {
                debug!(
                    "Stringified non-scalar JSON value for field '{}': {}",
                    key, other
                );
                stats.text_cells += 1;
                record.insert(key.clone(), CellValue::Text(other.to_string()));
            }
        }
    }

    record
}
