//! Configuration models for the Panel admin bundle.
//!
//! [`AppConfig`] is what a project declares about its admin panel.
//! [`BuildConfig`] is the declarative description handed to the bundler.
//! Producing one from the other lives in `panel-bundler`.

pub mod app;
pub mod build;
pub mod discovery;
pub mod error;
pub mod validation;

// Re-export main types
pub use app::*;
pub use build::*;
pub use error::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, collect_public_env, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
