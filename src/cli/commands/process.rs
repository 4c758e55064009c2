//! Process command implementation
//!
//! Runs the full ingestion-and-computation pipeline over one input file,
//! publishes the result as the current dataset, and renders it for the
//! terminal (with optional CSV export).

use tracing::info;

use super::shared;
use crate::app::services::dataset_store::DatasetStore;
use crate::app::services::exporter;
use crate::app::services::pipeline::PipelineProcessor;
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::{Error, Result};

/// Execute the process command
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), args.quiet);
    args.validate()?;

    let limits = shared::load_limits(args.limits_file.as_deref())?;
    let format = args.resolved_format()?;
    let content = shared::read_input(&args.input).await?;

    // The core pipeline is one synchronous pass; a failure here leaves any
    // previously published dataset untouched
    let processor = PipelineProcessor::new(limits.clone());
    let result = processor.process(&content, format)?;
    let stats = result.stats.clone();

    // Replace the current dataset wholesale; everything below reads the
    // published snapshot
    let store = DatasetStore::new();
    let dataset = store.replace(result.records);

    match args.output_format {
        OutputFormat::Human => {
            shared::print_result_table(&dataset);
            shared::print_summary(&stats, &dataset);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(dataset.as_slice()).map_err(|e| {
                Error::data_validation(format!("failed to serialize results: {}", e))
            })?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            print!("{}", exporter::export_csv(&dataset, &limits)?);
        }
    }

    if let Some(export_path) = &args.export_path {
        exporter::export_to_file(export_path, &dataset, &limits)?;
        if !args.quiet {
            println!();
            println!("Exported {} records to {}", dataset.len(), export_path.display());
        }
    }

    info!("Process command complete");
    Ok(())
}
