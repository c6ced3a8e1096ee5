//! Pluggable config validation strategies
//!
//! The production builder never validates; these are for `panel check`
//! and for embedders that want to fail early.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::app::AppConfig;
use crate::error::{ConfigError, Result};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"));

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &AppConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use panel_config::{AppConfig, ConfigValidator, SchemaValidator};
///
/// let config = AppConfig::default().with_public_env("API_URL", "https://x");
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &AppConfig) -> Result<()> {
        let admin = &config.routes.admin;
        if !admin.starts_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!("admin route '{admin}' must start with '/'"),
                hint: Some("Use an absolute route such as \"/admin\"".to_string()),
            });
        }
        if admin.len() > 1 && admin.ends_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!("admin route '{admin}' must not end with '/'"),
                hint: Some("The public path appends the trailing slash itself".to_string()),
            });
        }

        // Keys become `process.env.<KEY>` in the bundle
        for key in config.public_env.keys() {
            if !IDENTIFIER.is_match(key) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("public env key '{key}' is not a valid identifier"),
                    hint: Some(
                        "Use letters, digits, '_' or '$', not starting with a digit".to_string(),
                    ),
                });
            }
        }

        if config.server_modules.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "server module ids cannot be empty".to_string(),
                hint: Some("Remove empty strings from 'server_modules'".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the files the build configuration points at exist.
///
/// # Example
///
/// ```no_run
/// use panel_config::{AppConfig, ConfigValidator, FsValidator};
///
/// let config = AppConfig::default();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator; `root` stands in for a missing config dir
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &AppConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let config_dir = config.paths.config_dir_or(&self.root);

        let config_file = config_dir.join(&config.paths.config);
        if config.paths.config.as_os_str().is_empty() || !config_file.is_file() {
            return Err(ConfigError::ConfigFileNotFound { path: config_file });
        }

        if let Some(template) = &config.admin.index_html {
            let path = config.paths.under_config_dir(&self.root, template);
            if !path.is_file() {
                return Err(ConfigError::TemplateNotFound { path });
            }
        }

        if let Some(scss) = &config.paths.scss {
            let path = config.paths.under_config_dir(&self.root, scss);
            if !path.is_file() {
                return Err(ConfigError::StylesheetNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &AppConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &AppConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
