//! `build-config`: emit the production build configuration.

use panel_bundler::{BuildEnv, ProductionConfigBuilder};

use crate::cli::BuildConfigArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the build-config command.
///
/// 1. Resolve the working directory and load the project config
/// 2. Read the build environment (`--analyze` forces the analysis plugin)
/// 3. Assemble the production configuration
/// 4. Write it as JSON to stdout or `--out`
pub fn execute(args: BuildConfigArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let app = utils::load_config(&cwd, args.config.as_deref())?;

    let mut env = BuildEnv::from_lookup(&cwd, |key| std::env::var(key).ok());
    if args.analyze {
        env = env.with_analyze_bundle(true);
    }
    tracing::debug!(cwd = %env.cwd.display(), analyze = env.analyze_bundle, "build environment");

    let config = ProductionConfigBuilder::new(env).build(&app)?;

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    match args.out {
        Some(path) => {
            let path = cwd.join(path);
            std::fs::write(&path, json + "\n").map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            ui::success(&format!(
                "Wrote build configuration to {}",
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
