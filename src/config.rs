use crate::error::{IconStampError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub assets: AssetConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetConfig {
    /// Size labels to stamp out. Labels only shape filenames; the payload is
    /// identical for every slot.
    pub sizes: Vec<u32>,
    /// Filename template where `{size}` expands to each label.
    pub filename_template: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: AssetConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            // The icon slots an extension manifest references
            sizes: vec![16, 48, 128],
            filename_template: "icon{size}.png".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("icons"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(IconStampError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| IconStampError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| IconStampError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["iconstamp.toml", "iconstamp.config.toml", ".iconstamp.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                // No config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref sizes) = cli_args.sizes {
            self.assets.sizes = sizes.clone();
        }

        if let Some(ref template) = cli_args.filename_template {
            self.assets.filename_template = template.clone();
        }

        if let Some(ref directory) = cli_args.directory {
            self.output.directory = directory.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| IconStampError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| IconStampError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.assets.sizes.is_empty() {
            return Err(IconStampError::Config {
                message: "At least one size label must be specified".to_string(),
            });
        }

        if self.assets.sizes.contains(&0) {
            return Err(IconStampError::Config {
                message: "Size labels must be greater than 0".to_string(),
            });
        }

        // Duplicate labels render the same filename and silently collapse to
        // one file.
        let mut seen = std::collections::HashSet::new();
        for size in &self.assets.sizes {
            if !seen.insert(size) {
                return Err(IconStampError::Config {
                    message: format!("Duplicate size label: {}", size),
                });
            }
        }

        if !self.assets.filename_template.contains("{size}") {
            return Err(IconStampError::Config {
                message: format!(
                    "Filename template must contain the {{size}} placeholder: {}",
                    self.assets.filename_template
                ),
            });
        }

        if self.assets.filename_template.contains('/')
            || self.assets.filename_template.contains('\\')
        {
            return Err(IconStampError::Config {
                message: format!(
                    "Filename template must not contain path separators: {}",
                    self.assets.filename_template
                ),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub sizes: Option<Vec<u32>>,
    pub filename_template: Option<String>,
    pub directory: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: Option<Vec<u32>>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_filename_template(mut self, template: Option<String>) -> Self {
        self.filename_template = template;
        self
    }

    pub fn with_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.directory = directory;
        self
    }
}
