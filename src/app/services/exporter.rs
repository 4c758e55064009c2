//! Delimited re-serialization of the enriched dataset
//!
//! Export contract: header `Location,Latitude,Longitude,<pollutant columns
//! in configured order>,Index,Tier`, one row per record in original order.
//! The index is printed with two decimals; absent coordinates become empty
//! cells. Collaborators consume the enriched dataset read-only; export never
//! mutates it.

use std::path::Path;
use tracing::info;

use crate::app::models::EnrichedRecord;
use crate::config::PollutantLimits;
use crate::constants::{fields, DELIMITER};
use crate::{Error, Result};

/// Build the export header for a limit configuration
pub fn export_header(limits: &PollutantLimits) -> Vec<String> {
    let mut header = vec![
        fields::LOCATION.to_string(),
        fields::LATITUDE.to_string(),
        fields::LONGITUDE.to_string(),
    ];
    header.extend(limits.pollutants().map(str::to_string));
    header.push(fields::INDEX.to_string());
    header.push(fields::TIER.to_string());
    header
}

/// Serialize the enriched dataset as delimited text
pub fn export_csv(records: &[EnrichedRecord], limits: &PollutantLimits) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    writer
        .write_record(&export_header(limits))
        .map_err(|e| Error::csv_export("failed to write export header", e))?;

    for record in records {
        writer
            .write_record(&export_row(record, limits))
            .map_err(|e| {
                Error::csv_export(
                    format!("failed to write export row for '{}'", record.location),
                    e,
                )
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("failed to flush CSV export buffer", e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("export produced invalid UTF-8: {}", e)))
}

/// Serialize the enriched dataset and write it to a file
pub fn export_to_file(
    path: &Path,
    records: &[EnrichedRecord],
    limits: &PollutantLimits,
) -> Result<()> {
    let content = export_csv(records, limits)?;
    std::fs::write(path, content)
        .map_err(|e| Error::io(format!("failed to write export file {}", path.display()), e))?;

    info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Build one export row in header column order
fn export_row(record: &EnrichedRecord, limits: &PollutantLimits) -> Vec<String> {
    let mut row = vec![
        record.location.clone(),
        optional_number(record.latitude),
        optional_number(record.longitude),
    ];
    for pollutant in limits.pollutants() {
        row.push(
            record
                .concentration(pollutant)
                .unwrap_or(0.0)
                .to_string(),
        );
    }
    row.push(format!("{:.2}", record.index));
    row.push(record.tier.label().to_string());
    row
}

/// Render an optional coordinate as its cell content (empty when absent)
fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
