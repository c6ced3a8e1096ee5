//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use panel_config::{AppConfig, ConfigDiscovery};

use crate::error::Result;

/// Absolute working directory: `cwd` when given, else the process's.
pub fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(match cwd {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current.join(dir),
        None => current,
    })
}

/// Load the project config from `config`, or discover it under `cwd`.
pub fn load_config(cwd: &Path, config: Option<&Path>) -> Result<AppConfig> {
    let discovery = ConfigDiscovery::new(cwd);
    let app = match config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };
    Ok(app)
}
