//! Header row normalization for delimited input
//!
//! Field names from the header row become record keys, so they are trimmed
//! and have internal whitespace removed ("  High Lead " becomes "HighLead").

use csv::StringRecord;

/// Normalize a single header field name for use as a record key
pub fn normalize_field_name(raw: &str) -> String {
    raw.split_whitespace().collect()
}

/// Normalize every field name of a header row, preserving column positions
pub fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers.iter().map(normalize_field_name).collect()
}

/// Check whether a normalized header row carries at least one usable name
pub fn has_usable_headers(headers: &[String]) -> bool {
    headers.iter().any(|name| !name.is_empty())
}
