//! Tests for pipeline statistics

use crate::app::models::Tier;
use crate::app::services::pipeline::PipelineStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = PipelineStats::new();
    assert_eq!(stats.records_ingested, 0);
    assert_eq!(stats.records_enriched, 0);
    assert_eq!(stats.quality_warnings, 0);
    assert!(stats.is_complete());
}

#[test]
fn test_tier_tally() {
    let mut stats = PipelineStats::new();
    stats.tally_tier(Tier::Safe);
    stats.tally_tier(Tier::Safe);
    stats.tally_tier(Tier::Unsafe);
    stats.tally_tier(Tier::Undetermined);

    assert_eq!(stats.tier_count(Tier::Safe), 2);
    assert_eq!(stats.tier_count(Tier::Moderate), 0);
    assert_eq!(stats.tier_count(Tier::Unsafe), 1);
    assert_eq!(stats.tier_count(Tier::Undetermined), 1);
}

#[test]
fn test_completeness_invariant() {
    let mut stats = PipelineStats::new();
    stats.records_ingested = 3;
    stats.records_enriched = 2;
    assert!(!stats.is_complete());

    stats.records_enriched = 3;
    assert!(stats.is_complete());
}

#[test]
fn test_summary_mentions_distribution() {
    let mut stats = PipelineStats::new();
    stats.records_ingested = 2;
    stats.records_enriched = 2;
    stats.safe_count = 1;
    stats.moderate_count = 1;
    stats.quality_warnings = 3;

    let summary = stats.summary();
    assert!(summary.contains("2 -> 2 records"));
    assert!(summary.contains("Safe: 1"));
    assert!(summary.contains("Quality warnings: 3"));
}
