//! Tests for header row normalization

use crate::app::services::sample_parser::header::{
    has_usable_headers, normalize_field_name, normalize_headers,
};
use csv::StringRecord;

#[test]
fn test_field_names_are_trimmed() {
    assert_eq!(normalize_field_name("  Lead  "), "Lead");
    assert_eq!(normalize_field_name("\tCadmium"), "Cadmium");
}

#[test]
fn test_internal_whitespace_removed() {
    assert_eq!(normalize_field_name("High Lead"), "HighLead");
    assert_eq!(normalize_field_name("  sample   site name "), "samplesitename");
}

#[test]
fn test_empty_name_stays_empty() {
    assert_eq!(normalize_field_name(""), "");
    assert_eq!(normalize_field_name("   "), "");
}

#[test]
fn test_normalize_headers_preserves_positions() {
    let row = StringRecord::from(vec!["Location", " Lead ", "Heavy Metal X"]);
    let headers = normalize_headers(&row);
    assert_eq!(headers, vec!["Location", "Lead", "HeavyMetalX"]);
}

#[test]
fn test_usable_header_detection() {
    assert!(has_usable_headers(&["Location".to_string()]));
    assert!(has_usable_headers(&["".to_string(), "Lead".to_string()]));
    assert!(!has_usable_headers(&["".to_string(), "".to_string()]));
    assert!(!has_usable_headers(&[]));
}
