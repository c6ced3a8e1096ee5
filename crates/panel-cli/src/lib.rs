//! Command-line interface for the Panel admin bundle configuration.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `build-config` and `check`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
