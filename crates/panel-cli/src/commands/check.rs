//! `check`: validate the project config without building.

use panel_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let app = utils::load_config(&cwd, args.config.as_deref())?;
    ui::info(&format!("Checking {}", app.paths.config.display()));

    if args.fs {
        validate_fs(&app, &cwd)?;
    } else {
        validate_schema(&app)?;
        if app.admin.index_html.is_some() || app.paths.scss.is_some() {
            ui::warning("Referenced files were not checked; pass --fs to check them");
        }
    }

    ui::success("Configuration is valid");
    Ok(())
}
