use crate::config::{CliOverrides, Config};
use crate::error::{IconStampError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iconstamp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stamp out placeholder icon sets for browser extensions")]
#[command(
    long_about = "IconStamp writes a minimal embedded PNG into every icon slot an \
                       extension manifest expects, so a project loads before real \
                       artwork exists. Run it with no arguments to get the standard \
                       icons/icon16.png, icon48.png and icon128.png set."
)]
#[command(after_help = "EXAMPLES:\n  \
    iconstamp\n  \
    iconstamp assets/icons\n  \
    iconstamp --sizes 16,32,48,128\n  \
    iconstamp --template \"logo-{size}.png\" --output-format json\n  \
    iconstamp --config my-config.toml --dry-run")]
pub struct Cli {
    /// Output directory for the generated icons (defaults to "icons")
    pub directory: Option<PathBuf>,

    /// Icon size labels to stamp out (comma-separated)
    #[arg(short, long, help = "Size labels to stamp out (e.g., 16,48,128)")]
    pub sizes: Option<String>,

    /// Filename template; "{size}" expands to each size label
    #[arg(short, long)]
    pub template: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be written without touching the filesystem)
    #[arg(long, help = "Show what would be written without actually doing it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides()?;
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> Result<CliOverrides> {
        let sizes = match self.sizes {
            Some(ref raw) => {
                Some(parse_size_list(raw).map_err(|message| IconStampError::Config { message })?)
            }
            None => None,
        };

        Ok(CliOverrides::new()
            .with_sizes(sizes)
            .with_filename_template(self.template.clone())
            .with_directory(self.directory.clone()))
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

pub fn parse_size_list(s: &str) -> std::result::Result<Vec<u32>, String> {
    let mut sizes = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let size: u32 = part
            .parse()
            .map_err(|_| format!("Invalid size label: {}", part))?;

        if size == 0 {
            return Err("Size labels must be greater than 0".to_string());
        }

        sizes.push(size);
    }

    if sizes.is_empty() {
        return Err("At least one size label must be specified".to_string());
    }

    Ok(sizes)
}
