//! Application constants for HMPI processor
//!
//! This module contains the configuration constants, default values,
//! and field-name mappings used throughout the HMPI processor application.

// =============================================================================
// Pollutant Configuration Defaults
// =============================================================================

/// Default configured pollutants and their regulatory concentration limits.
///
/// Units match the input concentration units; keeping them consistent is the
/// caller's responsibility. The slice order fixes the concentration column
/// order in exports.
pub const DEFAULT_POLLUTANT_LIMITS: &[(&str, f64)] =
    &[("Lead", 0.01), ("Cadmium", 0.003), ("Arsenic", 0.01)];

// =============================================================================
// Severity Tier Constants
// =============================================================================

/// Classification thresholds with closed-open boundary semantics:
/// index <= SAFE_MAX is Safe, SAFE_MAX < index <= MODERATE_MAX is Moderate,
/// anything above is Unsafe.
pub mod tier_thresholds {
    /// Upper inclusive bound of the Safe tier
    pub const SAFE_MAX: f64 = 1.0;

    /// Upper inclusive bound of the Moderate tier
    pub const MODERATE_MAX: f64 = 2.0;
}

/// Fixed display colors per severity tier
pub mod tier_colors {
    /// Safe tier display color
    pub const SAFE: &str = "#4CAF50";

    /// Moderate tier display color
    pub const MODERATE: &str = "#FFC107";

    /// Unsafe tier display color
    pub const UNSAFE: &str = "#F44336";

    /// Undetermined tier display color (non-finite index)
    pub const UNDETERMINED: &str = "#9E9E9E";
}

// =============================================================================
// Field Name Constants
// =============================================================================

/// Presentation field names in sample records
pub mod fields {
    /// Sample site name column
    pub const LOCATION: &str = "Location";

    /// Sample site latitude column
    pub const LATITUDE: &str = "Latitude";

    /// Sample site longitude column
    pub const LONGITUDE: &str = "Longitude";

    /// Computed index column (export only)
    pub const INDEX: &str = "Index";

    /// Computed severity tier column (export only)
    pub const TIER: &str = "Tier";
}

/// Sentinel location used when a record carries no usable location
pub const UNKNOWN_LOCATION: &str = "Unknown";

// =============================================================================
// Input and Output Constants
// =============================================================================

/// Field delimiter for delimited text input and export
pub const DELIMITER: u8 = b',';

/// File extension recognized as delimited text input
pub const CSV_EXTENSION: &str = "csv";

/// File extension recognized as structured hierarchical input
pub const JSON_EXTENSION: &str = "json";

/// Default filename for the exported results dataset
pub const EXPORT_FILENAME: &str = "hmpi_results.csv";

/// Default filename for the bundled sample dataset
pub const SAMPLE_FILENAME: &str = "sample_hmpi.csv";

/// Bundled two-site sample dataset for trying the processor out
pub const SAMPLE_DATASET: &str = "Location,Latitude,Longitude,Lead,Cadmium,Arsenic\n\
                                  Site1,20.3,78.2,0.02,0.01,0.003\n\
                                  Site2,21.1,77.9,0.03,0.015,0.004";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a field name is one of the coordinate columns
pub fn is_coordinate_field(field_name: &str) -> bool {
    field_name == fields::LATITUDE || field_name == fields::LONGITUDE
}

/// Check if a field name is a presentation field rather than a measurement
pub fn is_presentation_field(field_name: &str) -> bool {
    field_name == fields::LOCATION || is_coordinate_field(field_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_are_positive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, limit) in DEFAULT_POLLUTANT_LIMITS {
            assert!(*limit > 0.0, "limit for {} must be positive", name);
            assert!(seen.insert(*name), "duplicate pollutant {}", name);
        }
        assert_eq!(DEFAULT_POLLUTANT_LIMITS.len(), 3);
    }

    #[test]
    fn test_tier_thresholds_ordering() {
        assert!(tier_thresholds::SAFE_MAX < tier_thresholds::MODERATE_MAX);
    }

    #[test]
    fn test_presentation_field_detection() {
        assert!(is_presentation_field(fields::LOCATION));
        assert!(is_presentation_field(fields::LATITUDE));
        assert!(is_presentation_field(fields::LONGITUDE));
        assert!(!is_presentation_field("Lead"));
        assert!(is_coordinate_field(fields::LONGITUDE));
        assert!(!is_coordinate_field(fields::LOCATION));
    }

    #[test]
    fn test_sample_dataset_shape() {
        let lines: Vec<&str> = SAMPLE_DATASET.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(fields::LOCATION));
        for (name, _) in DEFAULT_POLLUTANT_LIMITS {
            assert!(lines[0].contains(name), "header missing {}", name);
        }
    }
}
