//! Sample command implementation
//!
//! Writes the bundled two-site sample dataset so users can try the
//! processor without preparing their own data.

use std::path::PathBuf;
use tracing::info;

use super::shared;
use crate::cli::args::SampleArgs;
use crate::constants::{SAMPLE_DATASET, SAMPLE_FILENAME};
use crate::{Error, Result};

/// Execute the sample command
pub async fn run_sample(args: SampleArgs) -> Result<()> {
    shared::setup_logging("warn", false);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(SAMPLE_FILENAME));

    if output.exists() && !args.force {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            output.display()
        )));
    }

    tokio::fs::write(&output, SAMPLE_DATASET)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", output.display()), e))?;

    info!("Sample dataset written to {}", output.display());
    println!("Wrote sample dataset to {}", output.display());
    println!("Try: hmpi-processor process {}", output.display());
    Ok(())
}
