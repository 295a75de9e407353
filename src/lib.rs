pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{AssetConfig, CliOverrides, Config, OutputConfig};
pub use error::{IconStampError, Result, UserFriendlyError};

// Core functionality re-exports
pub use assets::{
    is_png, ConfigSnapshot, GenerationProgress, GenerationReport, GenerationSummary, IconFileInfo,
    IconWriter, PLACEHOLDER_PNG, PNG_SIGNATURE,
};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for IconStamp functionality
pub struct IconStamp {
    config: Config,
    output_formatter: OutputFormatter,
}

impl IconStamp {
    /// Create a new IconStamp instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create IconStamp instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Stamp the configured placeholder icon set onto disk
    pub fn generate_icons(&self) -> Result<GenerationReport> {
        self.output_formatter
            .start_operation("Stamping placeholder icons");

        // Step 1: Ensure the output directory exists
        let writer = IconWriter::new(self.config.output.directory.clone());
        writer.initialize()?;

        self.output_formatter.debug(&format!(
            "Using output directory: {}",
            writer.output_directory().display()
        ));

        // Step 2: Write one payload copy per size label
        let formatter = &self.output_formatter;
        let directory = writer.output_directory().to_path_buf();
        let log_progress = move |progress: &GenerationProgress| {
            if let Some(ref filename) = progress.current_file {
                formatter.info(&format!("Created {}", directory.join(filename).display()));
            }
        };

        let (progress, files) = writer.write_icons(
            PLACEHOLDER_PNG,
            &self.config.assets.sizes,
            &self.config.assets.filename_template,
            Some(&log_progress),
        )?;

        // Step 3: Assemble the report
        let report =
            writer.create_generation_report(files, &progress, &self.create_config_snapshot());

        self.output_formatter.print_generation_summary(&progress);

        Ok(report)
    }

    /// Create configuration snapshot for reporting
    fn create_config_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            sizes: self.config.assets.sizes.clone(),
            filename_template: self.config.assets.filename_template.clone(),
            directory: self.config.output.directory.clone(),
        }
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(IconStampError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &IconStampError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to stamp the default icon set with minimal setup
pub fn stamp_icons_simple(output_dir: Option<&Path>, verbose: bool) -> Result<GenerationReport> {
    let mut config = Config::default();

    if let Some(output_path) = output_dir {
        config.output.directory = output_path.to_path_buf();
    }

    let iconstamp = IconStamp::new(
        config,
        OutputMode::Human,
        if verbose { 1 } else { 0 },
        false,
    );

    iconstamp.generate_icons()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
