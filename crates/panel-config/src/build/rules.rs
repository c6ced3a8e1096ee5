//! Module transformation rules and the conditions that select them.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Module transformation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl ModuleOptions {
    /// Rules applied to `path`, in rule order.
    ///
    /// A plain rule applies whenever it matches. A `oneOf` group contributes
    /// only its first matching rule.
    pub fn loaders_for(&self, path: &str) -> Vec<&LoaderRule> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::OneOf { one_of } => one_of.iter().find(|candidate| candidate.matches(path)),
                Rule::Loader(rule) => rule.matches(path).then_some(rule),
            })
            .collect()
    }
}

/// A single rule or a first-match-wins group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    OneOf {
        #[serde(rename = "oneOf")]
        one_of: Vec<LoaderRule>,
    },
    Loader(LoaderRule),
}

/// Loaders applied to modules selected by `test` and not by `exclude`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Condition>,

    /// Keep modules even when their exports look unused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<bool>,

    /// Loader chain, applied last to first by the bundler
    #[serde(rename = "use", default)]
    pub uses: Vec<LoaderUse>,
}

impl LoaderRule {
    pub fn new(test: Condition) -> Self {
        Self {
            test: Some(test),
            ..Self::default()
        }
    }

    pub fn exclude(mut self, exclude: Condition) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn side_effects(mut self, side_effects: bool) -> Self {
        self.side_effects = Some(side_effects);
        self
    }

    pub fn with_loader(mut self, loader: Loader, options: Value) -> Self {
        self.uses.push(LoaderUse { loader, options });
        self
    }

    pub fn matches(&self, path: &str) -> bool {
        let included = self.test.as_ref().is_none_or(|test| test.matches(path));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|exclude| exclude.matches(path));
        included && !excluded
    }

    pub fn loaders(&self) -> impl Iterator<Item = Loader> + '_ {
        self.uses.iter().map(|entry| entry.loader)
    }
}

/// One loader and its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderUse {
    pub loader: Loader,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

/// Loader packages the admin bundle relies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loader {
    #[serde(rename = "babel-loader")]
    Babel,
    #[serde(rename = "url-loader")]
    Url,
    #[serde(rename = "file-loader")]
    File,
    #[serde(rename = "css-loader")]
    Css,
    #[serde(rename = "postcss-loader")]
    Postcss,
    #[serde(rename = "sass-loader")]
    Sass,
    #[serde(rename = "mini-css-extract-plugin/loader")]
    CssExtract,
}

/// Selects module paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Pattern(Pattern),
    Any(Vec<Condition>),
    PackageDir(PackageDir),
}

impl Condition {
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Pattern::new(source).map(Self::Pattern)
    }

    /// Any of the given patterns.
    pub fn any_of(sources: &[&str]) -> Result<Self, regex::Error> {
        sources
            .iter()
            .map(|source| Self::pattern(source))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Any)
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(path),
            Self::Any(conditions) => conditions.iter().any(|condition| condition.matches(path)),
            Self::PackageDir(dir) => dir.matches(path),
        }
    }
}

/// Paths inside a dependency directory, except the listed packages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDir {
    pub directory: String,

    #[serde(default)]
    pub except: Vec<String>,
}

impl PackageDir {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            except: Vec::new(),
        }
    }

    pub fn except(mut self, package: impl Into<String>) -> Self {
        self.except.push(package.into());
        self
    }

    /// True when any `<directory>/` segment of `path` is followed by a
    /// package outside the allow list.
    pub fn matches(&self, path: &str) -> bool {
        let normalized = path.replace('\\', "/");
        let segments: Vec<&str> = normalized.split('/').collect();

        segments
            .iter()
            .enumerate()
            .filter(|(index, segment)| **segment == self.directory && index + 1 < segments.len())
            .any(|(index, _)| !self.is_allowed(&segments[index + 1..]))
    }

    fn is_allowed(&self, rest: &[&str]) -> bool {
        self.except.iter().any(|package| {
            let package: Vec<&str> = package.split('/').collect();
            rest.len() > package.len() && rest[..package.len()] == package[..]
        })
    }
}

/// Regular expression that serializes as its source text
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dependencies_except_core() -> Condition {
        Condition::PackageDir(PackageDir::new("node_modules").except("@panel/core"))
    }

    #[test]
    fn package_dir_excludes_dependencies() {
        let condition = dependencies_except_core();
        assert!(condition.matches("/proj/node_modules/react/index.js"));
        assert!(condition.matches("C:\\proj\\node_modules\\react\\index.js"));
        assert!(!condition.matches("/proj/src/index.js"));
    }

    #[test]
    fn package_dir_keeps_allow_listed_package() {
        let condition = dependencies_except_core();
        assert!(!condition.matches("/proj/node_modules/@panel/core/dist/admin/index.js"));
        // the package name must be followed by a path inside it
        assert!(condition.matches("/proj/node_modules/@panel/core-extras/index.js"));
    }

    #[test]
    fn package_dir_checks_nested_dependency_dirs() {
        let condition = dependencies_except_core();
        assert!(condition.matches("/proj/node_modules/@panel/core/node_modules/lodash/index.js"));
    }

    #[test]
    fn one_of_takes_first_match() {
        let module = ModuleOptions {
            rules: vec![Rule::OneOf {
                one_of: vec![
                    LoaderRule::new(Condition::pattern(r"\.png$").unwrap())
                        .with_loader(Loader::Url, Value::Null),
                    LoaderRule::default().with_loader(Loader::File, Value::Null),
                ],
            }],
        };

        let png: Vec<_> = module
            .loaders_for("logo.png")
            .into_iter()
            .flat_map(|rule| rule.loaders())
            .collect();
        assert_eq!(png, vec![Loader::Url]);

        let svg: Vec<_> = module
            .loaders_for("logo.svg")
            .into_iter()
            .flat_map(|rule| rule.loaders())
            .collect();
        assert_eq!(svg, vec![Loader::File]);
    }

    #[test]
    fn rules_round_trip_through_json() {
        let rule = Rule::Loader(
            LoaderRule::new(Condition::pattern(r"\.js$").unwrap())
                .exclude(dependencies_except_core())
                .with_loader(Loader::Babel, json!({ "presets": [] })),
        );

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["test"], json!(r"\.js$"));
        assert_eq!(value["use"][0]["loader"], json!("babel-loader"));

        let parsed: Rule = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn loaders_serialize_as_package_names() {
        let names = [
            (Loader::Babel, "babel-loader"),
            (Loader::Url, "url-loader"),
            (Loader::File, "file-loader"),
            (Loader::Css, "css-loader"),
            (Loader::Postcss, "postcss-loader"),
            (Loader::Sass, "sass-loader"),
            (Loader::CssExtract, "mini-css-extract-plugin/loader"),
        ];
        for (loader, name) in names {
            assert_eq!(serde_json::to_value(loader).unwrap(), json!(name));
        }
    }

    #[test]
    fn one_of_serializes_with_bundler_key() {
        let rule = Rule::OneOf { one_of: vec![] };
        assert_eq!(serde_json::to_value(&rule).unwrap(), json!({ "oneOf": [] }));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(Pattern::new("(").is_err());
        let parsed: Result<Pattern, _> = serde_json::from_value(json!("("));
        assert!(parsed.is_err());
    }
}
