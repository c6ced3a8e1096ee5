//! The slice of the process environment a build depends on.

use std::path::PathBuf;

use crate::error::Result;

/// Enables the bundle analysis plugin when set to any non-empty value
pub const ANALYZE_BUNDLE_VAR: &str = "PANEL_ANALYZE_BUNDLE";

/// Overrides where the admin package is installed
pub const ADMIN_ROOT_VAR: &str = "PANEL_ADMIN_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    /// Working directory of the invoking process
    pub cwd: PathBuf,

    /// Append the bundle analysis plugin
    pub analyze_bundle: bool,

    /// Root of the installed admin package (relative to `cwd` when relative)
    pub admin_root: Option<PathBuf>,
}

impl BuildEnv {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            analyze_bundle: false,
            admin_root: None,
        }
    }

    /// Read the working directory and build variables of this process.
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_lookup(cwd, |key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        }))
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Example
    /// ```
    /// use panel_bundler::BuildEnv;
    ///
    /// let env = BuildEnv::from_lookup("/proj", |key| {
    ///     (key == "PANEL_ANALYZE_BUNDLE").then(|| "1".to_string())
    /// });
    /// assert!(env.analyze_bundle);
    /// assert!(env.admin_root.is_none());
    /// ```
    pub fn from_lookup(
        cwd: impl Into<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        // Any non-empty value counts, including "0" and "false"
        let analyze_bundle = lookup(ANALYZE_BUNDLE_VAR).is_some_and(|value| !value.is_empty());
        let admin_root = lookup(ADMIN_ROOT_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            cwd: cwd.into(),
            analyze_bundle,
            admin_root,
        }
    }

    pub fn with_analyze_bundle(mut self, analyze_bundle: bool) -> Self {
        self.analyze_bundle = analyze_bundle;
        self
    }

    pub fn with_admin_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.admin_root = Some(root.into());
        self
    }
}
