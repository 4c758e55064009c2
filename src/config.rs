//! Configuration management and validation.
//!
//! Provides the pollutant limit configuration used by the index calculator,
//! including the default regulatory limits and JSON file loading for custom
//! limit sets.

use crate::constants::DEFAULT_POLLUTANT_LIMITS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A single configured pollutant with its regulatory concentration limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantLimit {
    /// Pollutant name as it appears in input column headers (e.g. "Lead")
    pub pollutant: String,

    /// Regulatory concentration limit, in the same units as the input data
    pub limit: f64,
}

/// Ordered mapping from a closed set of pollutant names to regulatory limits
///
/// This is the immutable, process-wide configuration defined at startup.
/// The entry order is significant: it fixes the concentration column order
/// in exports and summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollutantLimits {
    entries: Vec<PollutantLimit>,
}

impl PollutantLimits {
    /// Create a limit set with validation
    pub fn new(entries: Vec<PollutantLimit>) -> Result<Self> {
        let limits = Self { entries };
        limits.validate()?;
        Ok(limits)
    }

    /// Load a limit set from a JSON file
    ///
    /// Expected shape: `[{"pollutant": "Lead", "limit": 0.01}, ...]`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read limits file {}", path.display()), e))?;

        let entries: Vec<PollutantLimit> = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid limits file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded {} pollutant limits from {}",
            entries.len(),
            path.display()
        );
        Self::new(entries)
    }

    /// Validate the limit set for consistency
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::configuration(
                "Pollutant limit set cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.pollutant.trim().is_empty() {
                return Err(Error::configuration(
                    "Pollutant name cannot be empty".to_string(),
                ));
            }

            if !seen.insert(entry.pollutant.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate pollutant '{}' in limit set",
                    entry.pollutant
                )));
            }

            if !entry.limit.is_finite() || entry.limit <= 0.0 {
                return Err(Error::configuration(format!(
                    "Limit for '{}' must be a positive number, got {}",
                    entry.pollutant, entry.limit
                )));
            }
        }

        Ok(())
    }

    /// Number of configured pollutants (the index divisor)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the limit set is empty (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the limit for a pollutant name
    pub fn limit_for(&self, pollutant: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.pollutant == pollutant)
            .map(|entry| entry.limit)
    }

    /// Iterate configured pollutant names in configuration order
    pub fn pollutants(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.pollutant.as_str())
    }

    /// Iterate (pollutant, limit) pairs in configuration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.pollutant.as_str(), entry.limit))
    }
}

impl Default for PollutantLimits {
    /// The default configuration: Lead 0.01, Cadmium 0.003, Arsenic 0.01
    fn default() -> Self {
        Self {
            entries: DEFAULT_POLLUTANT_LIMITS
                .iter()
                .map(|(pollutant, limit)| PollutantLimit {
                    pollutant: pollutant.to_string(),
                    limit: *limit,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn limit(pollutant: &str, value: f64) -> PollutantLimit {
        PollutantLimit {
            pollutant: pollutant.to_string(),
            limit: value,
        }
    }

    #[test]
    fn test_default_limits() {
        let limits = PollutantLimits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.len(), 3);
        assert_eq!(limits.limit_for("Lead"), Some(0.01));
        assert_eq!(limits.limit_for("Cadmium"), Some(0.003));
        assert_eq!(limits.limit_for("Arsenic"), Some(0.01));
        assert_eq!(limits.limit_for("Mercury"), None);
    }

    #[test]
    fn test_configuration_order_is_preserved() {
        let limits = PollutantLimits::default();
        let names: Vec<&str> = limits.pollutants().collect();
        assert_eq!(names, vec!["Lead", "Cadmium", "Arsenic"]);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(PollutantLimits::new(Vec::new()).is_err());
    }

    #[test]
    fn test_duplicate_pollutant_rejected() {
        let result = PollutantLimits::new(vec![limit("Lead", 0.01), limit("Lead", 0.02)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_limit_rejected() {
        assert!(PollutantLimits::new(vec![limit("Lead", 0.0)]).is_err());
        assert!(PollutantLimits::new(vec![limit("Lead", -0.01)]).is_err());
        assert!(PollutantLimits::new(vec![limit("Lead", f64::NAN)]).is_err());
    }

    #[test]
    fn test_blank_pollutant_name_rejected() {
        assert!(PollutantLimits::new(vec![limit("  ", 0.01)]).is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let limits = PollutantLimits::new(vec![limit("Mercury", 0.001), limit("Lead", 0.01)])
            .unwrap();
        let json = serde_json::to_string(&limits).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = PollutantLimits::from_file(file.path()).unwrap();
        assert_eq!(loaded, limits);
        let names: Vec<&str> = loaded.pollutants().collect();
        assert_eq!(names, vec!["Mercury", "Lead"]);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(PollutantLimits::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let result = PollutantLimits::from_file(Path::new("/nonexistent/limits.json"));
        assert!(result.is_err());
    }
}
