//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Panel - production bundle configuration for the admin UI
#[derive(Parser, Debug)]
#[command(
    name = "panel",
    version,
    about = "Production bundle configuration for the Panel admin UI",
    long_about = "Loads a project's panel config and emits the configuration the bundler\n\
                  needs to build the admin UI for production."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the production build configuration as JSON
    ///
    /// The configuration is written to stdout unless --out is given.
    BuildConfig(BuildConfigArgs),

    /// Validate the project config without building
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct BuildConfigArgs {
    /// Config file (default: discovered in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Add the bundle analysis plugin regardless of PANEL_ANALYZE_BUNDLE
    #[arg(long)]
    pub analyze: bool,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Config file (default: discovered in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Also check that referenced files exist
    #[arg(long)]
    pub fs: bool,
}
