use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconStampError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for IconStampError {
    fn user_message(&self) -> String {
        match self {
            IconStampError::Io(source) => {
                format!("IO operation failed: {}", source)
            }
            IconStampError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            IconStampError::Permission { path } => {
                format!("Permission denied accessing: {}", path)
            }
            IconStampError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            IconStampError::Io(_) => Some(
                "Check that the disk is not full and the output location is writable.".to_string()
            ),
            IconStampError::Config { .. } => Some(
                "Check your configuration file syntax and ensure sizes and the filename template are valid.".to_string()
            ),
            IconStampError::Permission { .. } => Some(
                "Ensure you have write permission for the output directory, or choose a different directory.".to_string()
            ),
            IconStampError::InvalidPath { .. } => Some(
                "Icon filenames must not contain path separators or characters reserved by the filesystem.".to_string()
            ),
        }
    }
}

impl From<toml::de::Error> for IconStampError {
    fn from(error: toml::de::Error) -> Self {
        IconStampError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconStampError>;
