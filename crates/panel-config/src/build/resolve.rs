use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Module resolution rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolve {
    /// Replacements for platform built-ins that do not exist in the browser
    #[serde(default)]
    pub fallback: IndexMap<String, Fallback>,

    /// Directories searched for bare module ids
    #[serde(default)]
    pub modules: Vec<PathBuf>,

    /// Import id → path redirects. A trailing `$` restricts a key to exact matches.
    #[serde(default)]
    pub alias: IndexMap<String, PathBuf>,
}

impl Resolve {
    /// Insert an alias, returning the path it replaced.
    pub fn add_alias(&mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.alias.insert(id.into(), path.into())
    }

    pub fn alias(&self, id: &str) -> Option<&Path> {
        self.alias.get(id).map(PathBuf::as_path)
    }
}

/// Where the loader resolver looks for loader packages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveLoader {
    #[serde(default)]
    pub modules: Vec<PathBuf>,
}

/// Fallback for a built-in module.
///
/// Serialized the way bundlers expect it: `false` disables the module,
/// a string names the browser replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FallbackRepr", into = "FallbackRepr")]
pub enum Fallback {
    /// Resolve the built-in to an empty module
    Disabled,
    /// Resolve the built-in to this package
    Module(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FallbackRepr {
    Flag(bool),
    Module(String),
}

impl TryFrom<FallbackRepr> for Fallback {
    type Error = String;

    fn try_from(repr: FallbackRepr) -> Result<Self, Self::Error> {
        match repr {
            FallbackRepr::Flag(false) => Ok(Self::Disabled),
            FallbackRepr::Flag(true) => {
                Err("fallback must be `false` or a module name, found `true`".to_string())
            }
            FallbackRepr::Module(module) => Ok(Self::Module(module)),
        }
    }
}

impl From<Fallback> for FallbackRepr {
    fn from(fallback: Fallback) -> Self {
        match fallback {
            Fallback::Disabled => Self::Flag(false),
            Fallback::Module(module) => Self::Module(module),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallback_serializes_like_bundler_schema() {
        let mut resolve = Resolve::default();
        resolve
            .fallback
            .insert("path".into(), Fallback::Module("path-browserify".into()));
        resolve.fallback.insert("crypto".into(), Fallback::Disabled);

        let value = serde_json::to_value(&resolve).unwrap();
        assert_eq!(value["fallback"], json!({ "path": "path-browserify", "crypto": false }));
    }

    #[test]
    fn fallback_rejects_true() {
        let result: Result<Fallback, _> = serde_json::from_value(json!(true));
        assert!(result.is_err());
    }

    #[test]
    fn add_alias_reports_replaced_path() {
        let mut resolve = Resolve::default();
        assert!(resolve.add_alias("fs", "/mock.js").is_none());
        assert_eq!(
            resolve.add_alias("fs", "/other.js"),
            Some(PathBuf::from("/mock.js"))
        );
        assert_eq!(resolve.alias("fs"), Some(Path::new("/other.js")));
    }
}
