//! File-based config discovery for CLI use
//!
//! Finds a project config file and layers it with environment overrides.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use indexmap::IndexMap;
use serde_json::Value;

use crate::app::AppConfig;
use crate::error::{ConfigError, Result};

/// Config file names, in search order
pub const CONFIG_FILES: [&str; 2] = ["panel.config.toml", "panel.config.json"];

/// Field of package.json holding the config
pub const PACKAGE_JSON_FIELD: &str = "panel";

/// Prefix of environment overrides, e.g. `PANEL_ROUTES__ADMIN`
pub const ENV_PREFIX: &str = "PANEL_";

/// Prefix of variables copied into `public_env`
pub const PUBLIC_ENV_PREFIX: &str = "PANEL_PUBLIC_";

/// File-based configuration discovery
///
/// This is primarily for CLI use - library users build an [`AppConfig`]
/// directly or deserialize one themselves.
///
/// # Example
///
/// ```no_run
/// use panel_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. panel.config.toml
    /// 2. panel.config.json
    /// 3. package.json (panel field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in CONFIG_FILES {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        let content = std::fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<AppConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config from a specific file, relative paths resolve against the root
    pub fn load_from(&self, path: &Path) -> Result<AppConfig> {
        let path = std::path::absolute(self.root.join(path))?;
        if !path.is_file() {
            return Err(ConfigError::ConfigFileNotFound { path });
        }
        let config_dir = path.parent().unwrap_or(&self.root).to_path_buf();

        let figment = Figment::new()
            .merge(Serialized::default("paths.config_dir", &config_dir))
            .merge(Serialized::default("paths.config", &path))
            .merge(file_provider(&path)?)
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter(|key| !is_public_key(key.as_str()))
                    .split("__"),
            );

        let mut config: AppConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: if e.path.is_empty() {
                "config".to_string()
            } else {
                e.path.join(".")
            },
            hint: Some(e.to_string()),
        })?;

        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        config.public_env.extend(collect_public_env(vars));

        tracing::info!(path = %path.display(), "loaded panel config");
        tracing::debug!(
            public_env = config.public_env.len(),
            server_modules = config.server_modules.len(),
            "config contents"
        );

        Ok(config)
    }
}

/// `PANEL_PUBLIC_*` is collected verbatim by [`collect_public_env`]
fn is_public_key(key: &str) -> bool {
    let public = &PUBLIC_ENV_PREFIX[ENV_PREFIX.len()..];
    key.get(..public.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(public))
}

fn file_provider(path: &Path) -> Result<Figment> {
    let is_package_json = path.file_name() == Some(std::ffi::OsStr::new("package.json"));
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") if is_package_json => {
            Ok(Figment::from(Json::file(path)).focus(PACKAGE_JSON_FIELD))
        }
        Some("json") => Ok(Figment::from(Json::file(path))),
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Public environment variables among `vars`, sorted by name.
///
/// # Example
///
/// ```
/// use panel_config::collect_public_env;
///
/// let vars = vec![
///     ("PANEL_PUBLIC_API_URL".to_string(), "https://x".to_string()),
///     ("HOME".to_string(), "/root".to_string()),
/// ];
/// let public = collect_public_env(vars);
/// assert_eq!(public.len(), 1);
/// assert_eq!(public["PANEL_PUBLIC_API_URL"], "https://x");
/// ```
pub fn collect_public_env(
    vars: impl IntoIterator<Item = (String, String)>,
) -> IndexMap<String, String> {
    let mut public: IndexMap<String, String> = vars
        .into_iter()
        .filter(|(key, _)| key.starts_with(PUBLIC_ENV_PREFIX))
        .collect();
    public.sort_keys();
    public
}

/// Discover and load config from the current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use panel_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<AppConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
