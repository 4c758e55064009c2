use clap::Parser;
use hmpi_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HMPI Processor - Heavy Metal Pollution Index Calculator");
    println!("=======================================================");
    println!();
    println!("Process tabular environmental sample data into a classified dataset:");
    println!("each sample gets a normalized pollution index and a severity tier");
    println!("derived from configurable regulatory limits.");
    println!();
    println!("USAGE:");
    println!("    hmpi-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process a sample dataset and report classified results");
    println!("    validate    Check a sample dataset for format and data quality issues");
    println!("    sample      Write the bundled sample dataset to try the processor out");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Write the sample dataset and process it:");
    println!("    hmpi-processor sample");
    println!("    hmpi-processor process sample_hmpi.csv");
    println!();
    println!("    # Process a JSON dataset with custom limits and export the results:");
    println!("    hmpi-processor process samples.json --limits limits.json \\");
    println!("                           --export hmpi_results.csv");
    println!();
    println!("    # Check a dataset for quality issues without processing it:");
    println!("    hmpi-processor validate samples.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hmpi-processor <COMMAND> --help");
}
