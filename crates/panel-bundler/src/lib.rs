//! Production bundle configuration for the Panel admin UI.
//!
//! [`build_production_config`] turns an [`AppConfig`](panel_config::AppConfig)
//! into the [`BuildConfig`](panel_config::BuildConfig) the bundler consumes.
//! Nothing is bundled here; the result only describes how to bundle.
//!
//! ```no_run
//! use panel_bundler::build_production_config;
//! use panel_config::AppConfig;
//!
//! let app = AppConfig::default().with_server_module("fs-extra");
//! let build = build_production_config(&app)?;
//! assert!(build.alias("fs-extra").is_some());
//! # Ok::<(), panel_bundler::Error>(())
//! ```

pub mod assets;
pub mod env;
pub mod error;
pub mod production;

pub use assets::AdminAssets;
pub use env::BuildEnv;
pub use error::{Error, Result};
pub use production::{
    CONFIG_ALIAS, CORE_PACKAGE, CORE_STUB_ALIAS, ProductionConfigBuilder, SCSS_OVERRIDES_ALIAS,
    build_production_config,
};
