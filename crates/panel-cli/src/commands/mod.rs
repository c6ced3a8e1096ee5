//! Command implementations.
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod build_config;
pub mod check;
pub(crate) mod utils;

pub use build_config::execute as build_config_execute;
pub use check::execute as check_execute;
