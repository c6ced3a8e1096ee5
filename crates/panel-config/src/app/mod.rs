//! Application configuration: what a project declares about its admin panel.

mod hook;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub use hook::{ConfigTransform, TransformHook};

use crate::build::{BuildConfig, Mode};

/// Project configuration consumed by the production build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Routing base paths
    pub routes: Routes,

    /// Admin panel customization
    pub admin: AdminOptions,

    /// Filesystem locations of the project
    pub paths: Paths,

    /// Public environment variables compiled into the client bundle
    pub public_env: IndexMap<String, String>,

    /// Module ids replaced by an empty module in the client bundle
    pub server_modules: Vec<String>,

    /// Final say over the assembled build configuration
    #[serde(skip)]
    pub transform: Option<TransformHook>,
}

impl AppConfig {
    /// Add a public environment variable.
    ///
    /// # Example
    /// ```
    /// use panel_config::AppConfig;
    ///
    /// let config = AppConfig::default().with_public_env("API_URL", "https://example.com");
    /// assert_eq!(config.public_env["API_URL"], "https://example.com");
    /// ```
    pub fn with_public_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.public_env.insert(key.into(), value.into());
        self
    }

    /// Declare a module that must never reach the client bundle.
    pub fn with_server_module(mut self, id: impl Into<String>) -> Self {
        self.server_modules.push(id.into());
        self
    }

    /// Install a transform hook that receives the assembled build configuration.
    ///
    /// # Example
    /// ```
    /// use panel_config::{AppConfig, BuildConfig, Mode};
    ///
    /// let config = AppConfig::default().with_transform(|mut build: BuildConfig, _mode: Mode| {
    ///     build.plugins.clear();
    ///     Ok(build)
    /// });
    /// assert!(config.transform.is_some());
    /// ```
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(BuildConfig, Mode) -> crate::error::Result<BuildConfig> + Send + Sync + 'static,
    {
        self.transform = Some(TransformHook::new(transform));
        self
    }
}

/// Routing base paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    /// Base route of the admin panel (no trailing slash)
    pub admin: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            admin: "/admin".to_string(),
        }
    }
}

/// Admin panel customization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminOptions {
    /// Custom HTML template, relative to `paths.config_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_html: Option<PathBuf>,
}

/// Filesystem locations of the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory holding the project config (working directory when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,

    /// The project config file itself
    pub config: PathBuf,

    /// Stylesheet override, relative to `config_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scss: Option<PathBuf>,
}

impl Paths {
    /// Config directory, falling back to `cwd`.
    pub fn config_dir_or<'a>(&'a self, cwd: &'a Path) -> &'a Path {
        self.config_dir.as_deref().unwrap_or(cwd)
    }

    /// A declared project file below the config directory.
    ///
    /// The declared path is always appended, so a leading `/` does not
    /// escape `config_dir`.
    pub fn under_config_dir(&self, cwd: &Path, declared: &Path) -> PathBuf {
        let relative: PathBuf = declared
            .components()
            .filter(|part| !matches!(part, Component::RootDir | Component::Prefix(_)))
            .collect();
        self.config_dir_or(cwd).join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_snake_case_keys() {
        let config: AppConfig = serde_json::from_value(json!({
            "routes": { "admin": "/dashboard" },
            "admin": { "index_html": "custom.html" },
            "paths": { "config_dir": "/proj", "config": "/proj/panel.config.toml", "scss": "theme.scss" },
            "public_env": { "API_URL": "https://x", "BUILD": "42" },
            "server_modules": ["fs-extra"]
        }))
        .unwrap();

        assert_eq!(config.routes.admin, "/dashboard");
        assert_eq!(config.admin.index_html, Some(PathBuf::from("custom.html")));
        assert_eq!(config.paths.scss, Some(PathBuf::from("theme.scss")));
        assert_eq!(
            config.public_env.keys().collect::<Vec<_>>(),
            vec!["API_URL", "BUILD"]
        );
        assert_eq!(config.server_modules, vec!["fs-extra".to_string()]);
        assert!(config.transform.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: AppConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.routes.admin, "/admin");
        assert!(config.paths.config_dir.is_none());
        assert!(config.public_env.is_empty());
        assert!(config.server_modules.is_empty());
    }

    #[test]
    fn declared_files_are_appended_to_config_dir() {
        let paths = Paths {
            config_dir: Some(PathBuf::from("/proj")),
            ..Paths::default()
        };
        let cwd = Path::new("/work");
        assert_eq!(
            paths.under_config_dir(cwd, Path::new("/styles/x.scss")),
            PathBuf::from("/proj/styles/x.scss")
        );
        assert_eq!(
            paths.under_config_dir(cwd, Path::new("admin/index.html")),
            PathBuf::from("/proj/admin/index.html")
        );
        assert_eq!(
            Paths::default().under_config_dir(cwd, Path::new("theme.scss")),
            PathBuf::from("/work/theme.scss")
        );
    }

    #[test]
    fn config_dir_falls_back_to_cwd() {
        let cwd = PathBuf::from("/work");
        let mut paths = Paths::default();
        assert_eq!(paths.config_dir_or(&cwd), Path::new("/work"));

        paths.config_dir = Some(PathBuf::from("/proj"));
        assert_eq!(paths.config_dir_or(&cwd), Path::new("/proj"));
    }
}
