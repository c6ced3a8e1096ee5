//! Panel CLI - production bundle configuration for the admin UI.

use clap::Parser;
use miette::Result;
use panel_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    panel_cli::ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::BuildConfig(build_args) => commands::build_config_execute(build_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
