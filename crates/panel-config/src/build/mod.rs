//! Build configuration handed to the bundler.
//!
//! The shape follows the bundler's own configuration schema so the value
//! can be serialized and passed along untouched.

mod plugin;
mod resolve;
mod rules;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use plugin::{CssExtractOptions, DefineOptions, HtmlPluginOptions, Plugin};
pub use resolve::{Fallback, Resolve, ResolveLoader};
pub use rules::{Condition, Loader, LoaderRule, LoaderUse, ModuleOptions, PackageDir, Pattern, Rule};
pub use types::{ChunkSelection, Devtool, Minimizer, Mode, StatsPreset};

use crate::error::{ConfigError, Result};

/// Complete bundler configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Named entry points
    #[serde(default)]
    pub entry: IndexMap<String, Vec<PathBuf>>,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    #[serde(default)]
    pub stats: StatsPreset,

    #[serde(default)]
    pub optimization: Optimization,

    #[serde(default)]
    pub resolve_loader: ResolveLoader,

    #[serde(default)]
    pub module: ModuleOptions,

    #[serde(default)]
    pub resolve: Resolve,

    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl BuildConfig {
    /// Create from serde_json::Value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "build config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "build config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Alias target for `id`, if one is registered
    pub fn alias(&self, id: &str) -> Option<&Path> {
        self.resolve.alias(id)
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }

    /// The `Define` plugin, when present
    pub fn definitions(&self) -> Option<&IndexMap<String, String>> {
        self.plugins.iter().find_map(|plugin| match plugin {
            Plugin::Define(define) => Some(&define.definitions),
            _ => None,
        })
    }
}

/// Where and how emitted files are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub path: PathBuf,

    /// URL prefix the emitted files are served from
    pub public_path: String,

    pub filename: String,

    pub chunk_filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(default)]
    pub minimizer: Vec<Minimizer>,

    #[serde(default)]
    pub split_chunks: SplitChunks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// Modules matching `test` are grouped into the chunk `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheGroup {
    pub name: String,

    pub test: Condition,

    #[serde(default)]
    pub chunks: ChunkSelection,

    /// Create the chunk regardless of size and count limits
    #[serde(default)]
    pub enforce: bool,
}
