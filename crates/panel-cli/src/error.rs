//! Error handling for the Panel CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! result into a miette report.

use std::path::PathBuf;

use miette::Report;
use panel_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating the project config failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Assembling the build configuration failed
    #[error("Build configuration error: {0}")]
    Bundler(#[from] panel_bundler::Error),

    /// Writing the emitted configuration failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(err) | Self::Bundler(panel_bundler::Error::Config(err)) => err.hint(),
            Self::Write { .. } => Some("Check that the output directory exists and is writable"),
            _ => None,
        }
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to a miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint.to_string(), "{}", err),
        None => miette::miette!("{}", err),
    }
}
