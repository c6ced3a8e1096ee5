//! Production build configuration.
//!
//! Assembly happens in a fixed order:
//!
//! 1. base configuration (entry, output, optimization, rules, resolution, plugins)
//! 2. one alias per declared server module, pointing at the empty module
//! 3. the bundle analysis plugin, when the environment asks for it
//! 4. the stylesheet override alias (project file or built-in default)
//! 5. the project's transform hook, whose result replaces everything above

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use panel_config::{
    AppConfig, BuildConfig, CacheGroup, ChunkSelection, Condition, ConfigError, CssExtractOptions,
    DefineOptions, Devtool, Fallback, HtmlPluginOptions, Loader, LoaderRule, Minimizer, Mode,
    ModuleOptions, Optimization, OutputOptions, PackageDir, Plugin, Resolve, ResolveLoader, Rule,
    SplitChunks, StatsPreset,
};
use path_clean::PathClean;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::assets::AdminAssets;
use crate::env::BuildEnv;
use crate::error::Result;

/// Import id the admin UI reads the project config from
pub const CONFIG_ALIAS: &str = "panel/unsanitizedConfig";

/// Framework package; transpiled even though it lives in `node_modules`
pub const CORE_PACKAGE: &str = "@panel/core";

/// Exact-match alias keeping the server side of the framework out of the bundle
pub const CORE_STUB_ALIAS: &str = "@panel/core$";

/// Import id of the admin stylesheet overrides
pub const SCSS_OVERRIDES_ALIAS: &str = "panel-scss-overrides";

const OUTPUT_DIR: &str = "build";
const SCRIPT_FILENAME: &str = "[name].[chunkhash].js";
const MEDIA_FILENAME: &str = "static/media/[name].[hash:8].[ext]";
const CSS_FILENAME: &str = "[name].css";
const HTML_FILENAME: &str = "./index.html";
const DEPENDENCY_DIR: &str = "node_modules";

/// Images below this size (bytes) are inlined as data URIs
const INLINE_IMAGE_LIMIT: u64 = 10_000;

const STYLE_PATTERN: &str = r"\.(sa|sc|c)ss$";
const IMAGE_PATTERNS: [&str; 4] = [r"\.bmp$", r"\.gif$", r"\.jpe?g$", r"\.png$"];
const NON_ASSET_PATTERNS: [&str; 3] = [r"\.(js|jsx|mjs)$", r"\.html$", r"\.json$"];

/// Built-ins with no browser counterpart resolve to nothing
const DISABLED_BUILTINS: [&str; 4] = ["crypto", "https", "http", "assert"];

/// Builds the production [`BuildConfig`] for an [`AppConfig`].
///
/// # Example
///
/// ```
/// use panel_bundler::{BuildEnv, ProductionConfigBuilder};
/// use panel_config::AppConfig;
///
/// let builder = ProductionConfigBuilder::new(BuildEnv::new("/proj"));
/// let build = builder.build(&AppConfig::default()).unwrap();
/// assert_eq!(build.output.public_path, "/admin/");
/// ```
#[derive(Debug, Clone)]
pub struct ProductionConfigBuilder {
    env: BuildEnv,
    assets: AdminAssets,
}

impl ProductionConfigBuilder {
    pub fn new(env: BuildEnv) -> Self {
        let assets = AdminAssets::locate(&env);
        Self { env, assets }
    }

    /// Builder for the current process environment.
    pub fn from_process() -> Result<Self> {
        Ok(Self::new(BuildEnv::from_process()?))
    }

    pub fn with_assets(mut self, assets: AdminAssets) -> Self {
        self.assets = assets;
        self
    }

    pub fn env(&self) -> &BuildEnv {
        &self.env
    }

    pub fn assets(&self) -> &AdminAssets {
        &self.assets
    }

    /// Assemble the configuration.
    ///
    /// Nothing in `app` is validated. Errors come only from the transform
    /// hook, which sees the assembled configuration and [`Mode::Production`].
    pub fn build(&self, app: &AppConfig) -> Result<BuildConfig> {
        let mut config = self.base_config(app)?;

        self.alias_server_modules(&mut config, app);

        if self.env.analyze_bundle {
            debug!("bundle analysis enabled");
            config.plugins.push(Plugin::BundleAnalyzer);
        }

        let overrides = self.scss_overrides(app);
        debug!(path = %overrides.display(), "stylesheet overrides");
        config.resolve.add_alias(SCSS_OVERRIDES_ALIAS, overrides);

        match &app.transform {
            Some(hook) => {
                debug!("applying project transform hook");
                Ok(hook.apply(config, Mode::Production)?)
            }
            None => Ok(config),
        }
    }

    fn base_config(&self, app: &AppConfig) -> Result<BuildConfig> {
        let mut entry = IndexMap::new();
        entry.insert("main".to_string(), vec![self.assets.entry()]);

        Ok(BuildConfig {
            entry,
            output: self.output(app),
            mode: Mode::Production,
            devtool: Some(Devtool::SourceMap),
            stats: StatsPreset::ErrorsOnly,
            optimization: optimization()?,
            resolve_loader: ResolveLoader {
                modules: self.module_dirs(),
            },
            module: self.module_rules()?,
            resolve: self.resolve(app),
            plugins: self.plugins(app),
        })
    }

    fn output(&self, app: &AppConfig) -> OutputOptions {
        OutputOptions {
            path: self.env.cwd.join(OUTPUT_DIR),
            public_path: format!("{}/", app.routes.admin),
            filename: SCRIPT_FILENAME.to_string(),
            chunk_filename: SCRIPT_FILENAME.to_string(),
        }
    }

    fn module_dirs(&self) -> Vec<PathBuf> {
        vec![PathBuf::from(DEPENDENCY_DIR), self.assets.node_modules()]
    }

    fn module_rules(&self) -> Result<ModuleOptions> {
        let scripts = LoaderRule::new(pattern(r"\.js$")?)
            .exclude(Condition::PackageDir(
                PackageDir::new(DEPENDENCY_DIR).except(CORE_PACKAGE),
            ))
            .with_loader(
                Loader::Babel,
                json!({
                    "configFile": self.assets.babel_config(),
                    "envName": Mode::Production.as_str(),
                }),
            );

        let images = LoaderRule::new(any_of(&IMAGE_PATTERNS)?).with_loader(
            Loader::Url,
            json!({
                "limit": INLINE_IMAGE_LIMIT,
                "name": MEDIA_FILENAME,
            }),
        );

        let styles = LoaderRule::new(pattern(STYLE_PATTERN)?)
            .side_effects(true)
            .with_loader(Loader::CssExtract, Value::Null)
            .with_loader(Loader::Css, Value::Null)
            .with_loader(
                Loader::Postcss,
                json!({
                    "postcssOptions": {
                        "plugins": [["postcss-preset-env", {}]],
                    },
                }),
            )
            .with_loader(Loader::Sass, Value::Null);

        // Anything else that is not code or markup is emitted as a file
        let files = LoaderRule {
            exclude: Some(any_of(&NON_ASSET_PATTERNS)?),
            ..LoaderRule::default()
        }
        .with_loader(Loader::File, json!({ "name": MEDIA_FILENAME }));

        Ok(ModuleOptions {
            rules: vec![
                Rule::Loader(scripts),
                Rule::OneOf {
                    one_of: vec![images, styles, files],
                },
            ],
        })
    }

    fn resolve(&self, app: &AppConfig) -> Resolve {
        let mut fallback = IndexMap::new();
        fallback.insert(
            "path".to_string(),
            Fallback::Module("path-browserify".to_string()),
        );
        for builtin in DISABLED_BUILTINS {
            fallback.insert(builtin.to_string(), Fallback::Disabled);
        }

        let mut resolve = Resolve {
            fallback,
            modules: self.module_dirs(),
            alias: IndexMap::new(),
        };
        resolve.add_alias(CONFIG_ALIAS, app.paths.config.clone());
        resolve.add_alias(CORE_STUB_ALIAS, self.assets.empty_module());
        resolve
    }

    fn plugins(&self, app: &AppConfig) -> Vec<Plugin> {
        let template = match &app.admin.index_html {
            Some(template) => self.under_config_dir(app, template),
            None => self.assets.index_html(),
        };

        let mut define = DefineOptions::default();
        for (key, value) in &app.public_env {
            define.define_str(format!("process.env.{key}"), value);
        }

        vec![
            Plugin::Html(HtmlPluginOptions {
                template,
                filename: HTML_FILENAME.to_string(),
            }),
            Plugin::Define(define),
            Plugin::CssExtract(CssExtractOptions {
                filename: CSS_FILENAME.to_string(),
                ignore_order: true,
            }),
        ]
    }

    fn alias_server_modules(&self, config: &mut BuildConfig, app: &AppConfig) {
        let empty_module = self.assets.empty_module();
        for id in &app.server_modules {
            if let Some(previous) = config.resolve.add_alias(id.as_str(), empty_module.clone()) {
                warn!(
                    module = %id,
                    previous = %previous.display(),
                    "server module replaces an existing alias"
                );
            }
        }
        debug!(count = app.server_modules.len(), "server modules stubbed");
    }

    fn scss_overrides(&self, app: &AppConfig) -> PathBuf {
        match &app.paths.scss {
            Some(scss) => self.under_config_dir(app, scss),
            None => self.assets.scss_overrides(),
        }
    }

    fn under_config_dir(&self, app: &AppConfig, declared: &Path) -> PathBuf {
        app.paths.under_config_dir(&self.env.cwd, declared).clean()
    }
}

fn optimization() -> Result<Optimization> {
    let mut cache_groups = IndexMap::new();
    cache_groups.insert(
        "styles".to_string(),
        CacheGroup {
            name: "styles".to_string(),
            test: pattern(STYLE_PATTERN)?,
            chunks: ChunkSelection::All,
            enforce: true,
        },
    );

    Ok(Optimization {
        minimizer: vec![Minimizer::Terser, Minimizer::CssMinimizer],
        split_chunks: SplitChunks { cache_groups },
    })
}

fn pattern(source: &str) -> Result<Condition> {
    Ok(Condition::pattern(source).map_err(ConfigError::from)?)
}

fn any_of(sources: &[&str]) -> Result<Condition> {
    Ok(Condition::any_of(sources).map_err(ConfigError::from)?)
}

/// Build the production configuration using the process environment.
///
/// Reads the working directory, `PANEL_ANALYZE_BUNDLE` and `PANEL_ADMIN_ROOT`.
pub fn build_production_config(app: &AppConfig) -> Result<BuildConfig> {
    ProductionConfigBuilder::from_process()?.build(app)
}
