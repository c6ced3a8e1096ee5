//! Error types for configuration loading, validation and transform hooks.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("config file not found: {}", .path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("HTML template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("stylesheet override not found: {}", .path.display())]
    StylesheetNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value for '{field}'")]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    // Caller-supplied build config transform
    #[error("build config transform failed: {0}")]
    Transform(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Hint attached to the error, when there is one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => hint.as_deref(),
            Self::NotFound => {
                Some("Create a panel.config.toml, panel.config.json or a 'panel' field in package.json")
            }
            _ => None,
        }
    }
}
