use serde::{Deserialize, Serialize};
use std::fmt;

/// Bundler mode, also the label handed to transform hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Optimized output (default)
    #[default]
    Production,
    /// Unoptimized output for local work
    Development,
    /// No mode-specific defaults
    None,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// External .map files
    SourceMap,
    /// Inline source maps (base64)
    InlineSourceMap,
    /// Per-module eval with source maps
    EvalSourceMap,
    /// Line-only external maps
    CheapModuleSourceMap,
}

/// How much the bundler reports after a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPreset {
    ErrorsOnly,
    ErrorsWarnings,
    Minimal,
    #[default]
    Normal,
    Verbose,
}

/// Chunks a split-chunks cache group selects from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    All,
    #[default]
    Async,
    Initial,
}

/// Minifier run over emitted assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimizer {
    /// Script minification
    Terser,
    /// Stylesheet minification
    CssMinimizer,
}
