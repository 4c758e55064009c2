//! Tests for parsing statistics

use super::parse_csv;
use crate::app::services::sample_parser::ParseStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = ParseStats::new();
    assert_eq!(stats.records_parsed, 0);
    assert_eq!(stats.total_cells(), 0);
    assert_eq!(stats.numeric_ratio(), 0.0);
}

#[test]
fn test_cell_counters() {
    let result = parse_csv("Location,Lead,Cadmium\nSite1,0.02,n/a");
    let stats = &result.stats;
    // "Site1" and "n/a" are text, 0.02 is numeric
    assert_eq!(stats.numeric_cells, 1);
    assert_eq!(stats.text_cells, 2);
    assert_eq!(stats.total_cells(), 3);
}

#[test]
fn test_numeric_ratio() {
    let stats = ParseStats {
        records_parsed: 2,
        numeric_cells: 3,
        text_cells: 1,
        ..Default::default()
    };
    assert!((stats.numeric_ratio() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_summary_mentions_counts() {
    let stats = ParseStats {
        records_parsed: 2,
        numeric_cells: 6,
        text_cells: 2,
        blank_lines_skipped: 1,
        excess_cells_ignored: 0,
    };
    let summary = stats.summary();
    assert!(summary.contains("2 records"));
    assert!(summary.contains("6 numeric"));
    assert!(summary.contains("1 blank"));
}

#[test]
fn test_stats_serialization() {
    let stats = ParseStats {
        records_parsed: 1,
        numeric_cells: 2,
        text_cells: 0,
        ..Default::default()
    };
    let json = serde_json::to_string(&stats).unwrap();
    let restored: ParseStats = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, stats);
}
