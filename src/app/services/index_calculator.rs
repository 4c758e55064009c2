//! Pollution index calculation
//!
//! Computes the normalized Heavy Metal Pollution Index for one sample
//! record: the average of (observed concentration / regulatory limit) across
//! the configured pollutants. The calculation is a pure function over
//! (record, limits) with no error conditions: absent or non-numeric fields
//! degrade gracefully to a zero contribution.

use tracing::debug;

use crate::app::models::RawRecord;
use crate::config::PollutantLimits;

/// Limit-weighted contribution of one pollutant, if the record carries a
/// numeric value for it
pub fn contribution(record: &RawRecord, pollutant: &str, limit: f64) -> Option<f64> {
    record.numeric(pollutant).map(|value| value / limit)
}

/// Compute the normalized pollution index for one record
///
/// Every configured pollutant with a numeric value adds `value / limit` to
/// the sum; absent or non-numeric pollutants contribute zero. The divisor is
/// always the configured pollutant count, not the count of pollutants
/// actually present. The result is clamped at zero and rounded to two
/// decimal places.
pub fn compute_index(record: &RawRecord, limits: &PollutantLimits) -> f64 {
    let mut sum = 0.0;

    for (pollutant, limit) in limits.iter() {
        match contribution(record, pollutant, limit) {
            Some(value) => sum += value,
            None => debug!("Pollutant '{}' contributes zero to the index", pollutant),
        }
    }

    let index = sum / limits.len() as f64;
    // Clamp without disturbing a non-finite value: NaN must reach the
    // classifier, which owns the non-finite policy
    let index = if index < 0.0 { 0.0 } else { index };
    round_index(index)
}

/// Round an index value to the two-decimal output precision
pub fn round_index(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::CellValue;

    fn record(fields: &[(&str, CellValue)]) -> RawRecord {
        let mut record = RawRecord::new();
        for (name, value) in fields {
            record.insert(*name, value.clone());
        }
        record
    }

    #[test]
    fn test_worked_scenario() {
        // ((0.02/0.01) + (0.01/0.003) + (0.003/0.01)) / 3 = 1.877... -> 1.88
        let record = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Cadmium", CellValue::Number(0.01)),
            ("Arsenic", CellValue::Number(0.003)),
        ]);
        let index = compute_index(&record, &PollutantLimits::default());
        assert_eq!(index, 1.88);
    }

    #[test]
    fn test_all_zero_concentrations() {
        let record = record(&[
            ("Lead", CellValue::Number(0.0)),
            ("Cadmium", CellValue::Number(0.0)),
            ("Arsenic", CellValue::Number(0.0)),
        ]);
        assert_eq!(compute_index(&record, &PollutantLimits::default()), 0.0);
    }

    #[test]
    fn test_missing_pollutant_equals_explicit_zero() {
        let limits = PollutantLimits::default();
        let without_cadmium = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Arsenic", CellValue::Number(0.003)),
        ]);
        let with_zero_cadmium = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Cadmium", CellValue::Number(0.0)),
            ("Arsenic", CellValue::Number(0.003)),
        ]);

        assert_eq!(
            compute_index(&without_cadmium, &limits),
            compute_index(&with_zero_cadmium, &limits)
        );
    }

    #[test]
    fn test_non_numeric_value_contributes_zero() {
        let limits = PollutantLimits::default();
        let with_text = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Cadmium", CellValue::from("n/a")),
        ]);
        let without = record(&[("Lead", CellValue::Number(0.02))]);

        assert_eq!(compute_index(&with_text, &limits), compute_index(&without, &limits));
    }

    #[test]
    fn test_divisor_is_configured_count() {
        // One pollutant present out of three configured: divide by 3
        let record = record(&[("Lead", CellValue::Number(0.03))]);
        let index = compute_index(&record, &PollutantLimits::default());
        assert_eq!(index, 1.0); // (0.03/0.01) / 3
    }

    #[test]
    fn test_field_order_invariance() {
        let limits = PollutantLimits::default();
        let forward = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Cadmium", CellValue::Number(0.01)),
            ("Arsenic", CellValue::Number(0.003)),
        ]);
        let reversed = record(&[
            ("Arsenic", CellValue::Number(0.003)),
            ("Cadmium", CellValue::Number(0.01)),
            ("Lead", CellValue::Number(0.02)),
        ]);
        assert_eq!(compute_index(&forward, &limits), compute_index(&reversed, &limits));
    }

    #[test]
    fn test_monotonic_in_each_pollutant() {
        let limits = PollutantLimits::default();
        let base = record(&[
            ("Lead", CellValue::Number(0.02)),
            ("Cadmium", CellValue::Number(0.01)),
            ("Arsenic", CellValue::Number(0.003)),
        ]);
        let base_index = compute_index(&base, &limits);

        for pollutant in ["Lead", "Cadmium", "Arsenic"] {
            let mut increased = base.clone();
            let bumped = base.numeric(pollutant).unwrap() + 0.01;
            increased.insert(pollutant, CellValue::Number(bumped));
            assert!(
                compute_index(&increased, &limits) >= base_index,
                "increasing {} must not decrease the index",
                pollutant
            );
        }
    }

    #[test]
    fn test_negative_sum_clamps_to_zero() {
        let record = record(&[("Lead", CellValue::Number(-0.05))]);
        assert_eq!(compute_index(&record, &PollutantLimits::default()), 0.0);
    }

    #[test]
    fn test_nan_value_propagates() {
        // A NaN concentration cannot come from the parser, but the
        // calculator must still hand it through to the classifier's policy
        let record = record(&[("Lead", CellValue::Number(f64::NAN))]);
        assert!(compute_index(&record, &PollutantLimits::default()).is_nan());
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(round_index(1.877777), 1.88);
        assert_eq!(round_index(1.884999), 1.88);
        assert_eq!(round_index(1.885001), 1.89);
        assert_eq!(round_index(0.0), 0.0);
    }
}
