use clap::Parser;
use iconstamp::{
    assets, Cli, IconStamp, IconStampError, OutputFormatter, OutputMode, UserFriendlyError,
    PLACEHOLDER_PNG,
};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create IconStamp instance
    let iconstamp = match IconStamp::from_cli(&cli) {
        Ok(iconstamp) => iconstamp,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&iconstamp);
    }

    // Execute main generation workflow
    match iconstamp.generate_icons() {
        Ok(report) => {
            // Display final report based on output format
            iconstamp.output_formatter().print_generation_report(&report);
            0
        }
        Err(e) => {
            iconstamp.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

// Map error types to appropriate exit codes
fn exit_code_for(error: &IconStampError) -> i32 {
    match error {
        IconStampError::Config { .. } => 2,
        IconStampError::InvalidPath { .. } => 3,
        IconStampError::Permission { .. } => 7,
        IconStampError::Io(_) => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "iconstamp.toml".to_string());

    match IconStamp::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  iconstamp --config {}", config_path);
            println!("\nEdit the file to customize sizes, the filename template, and the output directory.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(iconstamp: &IconStamp) -> i32 {
    let formatter = iconstamp.output_formatter();
    let config = iconstamp.config();

    formatter.info("DRY RUN MODE - No files will be written");
    formatter.print_separator();

    formatter.info("Configuration that would be used:");
    println!(
        "  Sizes: {}",
        config
            .assets
            .sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Filename template: {}", config.assets.filename_template);
    println!("  Output directory: {}", config.output.directory.display());
    println!("  Payload: {} bytes (embedded PNG)", PLACEHOLDER_PNG.len());

    formatter.print_separator();

    formatter.info("Files that would be written:");
    for &size in &config.assets.sizes {
        let filename = assets::writer::render_filename(&config.assets.filename_template, size);
        println!("  {}", config.output.directory.join(filename).display());
    }

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to write the icon set");

    0
}

fn print_startup_error(error: &IconStampError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
