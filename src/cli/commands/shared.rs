//! Shared components for CLI commands
//!
//! This module contains common utilities used across the command
//! implementations: logging setup, input reading, limits loading, and
//! terminal result rendering.

use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{EnrichedRecord, Tier};
use crate::app::services::pipeline::PipelineStats;
use crate::config::PollutantLimits;
use crate::{Error, Result};

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hmpi_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Read the raw input file
///
/// This is the pipeline's only suspension point: the core itself runs as a
/// single blocking call once the full input is in memory.
pub async fn read_input(path: &Path) -> Result<String> {
    info!("Reading input file: {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read input file {}", path.display()), e))
}

/// Load the pollutant limit configuration (custom file or defaults)
pub fn load_limits(limits_file: Option<&Path>) -> Result<PollutantLimits> {
    match limits_file {
        Some(path) => {
            info!("Loading pollutant limits from {}", path.display());
            PollutantLimits::from_file(path)
        }
        None => {
            debug!("Using default pollutant limits");
            Ok(PollutantLimits::default())
        }
    }
}

/// Render a tier label with its terminal color
pub fn colorize_tier(tier: Tier) -> colored::ColoredString {
    match tier {
        Tier::Safe => tier.label().green(),
        Tier::Moderate => tier.label().yellow(),
        Tier::Unsafe => tier.label().red(),
        Tier::Undetermined => tier.label().dimmed(),
    }
}

/// Print the per-record result table
pub fn print_result_table(records: &[EnrichedRecord]) {
    if records.is_empty() {
        println!("No records in dataset.");
        return;
    }

    println!();
    println!("{:<24} {:>8}  {}", "Location".bold(), "Index".bold(), "Tier".bold());
    println!("{}", "-".repeat(44));
    for record in records {
        println!(
            "{:<24} {:>8.2}  {}",
            record.location,
            record.index,
            colorize_tier(record.tier)
        );
    }
}

/// Print the dashboard-style dataset summary
pub fn print_summary(stats: &PipelineStats, records: &[EnrichedRecord]) {
    println!();
    println!("{}", "Dataset summary".bold());
    println!("  Samples:       {}", stats.records_enriched);
    println!(
        "  Tiers:         {} {} / {} {} / {} {}",
        stats.safe_count,
        colorize_tier(Tier::Safe),
        stats.moderate_count,
        colorize_tier(Tier::Moderate),
        stats.unsafe_count,
        colorize_tier(Tier::Unsafe),
    );
    if stats.undetermined_count > 0 {
        println!(
            "  Undetermined:  {} {}",
            stats.undetermined_count,
            colorize_tier(Tier::Undetermined)
        );
    }

    let max_index = records
        .iter()
        .map(|record| record.index)
        .filter(|index| index.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max_index.is_finite() {
        println!("  Highest index: {:.2}", max_index);
    }

    if stats.quality_warnings > 0 {
        println!(
            "  {}",
            format!("Data quality warnings: {}", stats.quality_warnings).yellow()
        );
    }
}
