use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plugin instances, in the order the bundler runs them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// Emit the HTML entry page
    Html(HtmlPluginOptions),
    /// Replace identifiers with constants at bundle time
    Define(DefineOptions),
    /// Move stylesheets into their own files
    CssExtract(CssExtractOptions),
    /// Report bundle composition and sizes
    BundleAnalyzer,
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html(_) => "html",
            Self::Define(_) => "define",
            Self::CssExtract(_) => "css-extract",
            Self::BundleAnalyzer => "bundle-analyzer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPluginOptions {
    /// Template the page is rendered from
    pub template: PathBuf,

    /// Output filename, relative to the output directory
    pub filename: String,
}

/// Textual substitutions. Values are source code, not data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefineOptions {
    #[serde(default)]
    pub definitions: IndexMap<String, String>,
}

impl DefineOptions {
    /// Define `key` as a string literal holding `value`.
    ///
    /// The substitution is textual, so the value is wrapped in single quotes
    /// with backslashes and quotes escaped.
    ///
    /// # Example
    /// ```
    /// use panel_config::DefineOptions;
    ///
    /// let mut define = DefineOptions::default();
    /// define.define_str("process.env.API_URL", "https://x");
    /// assert_eq!(define.definitions["process.env.API_URL"], "'https://x'");
    /// ```
    pub fn define_str(&mut self, key: impl Into<String>, value: &str) {
        self.definitions.insert(key.into(), quote_str(value));
    }
}

fn quote_str(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractOptions {
    pub filename: String,

    /// Silence warnings about conflicting stylesheet order across chunks
    #[serde(default)]
    pub ignore_order: bool,
}
