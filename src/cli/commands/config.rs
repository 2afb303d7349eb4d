//! Config commands.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TaskhintError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file exists and `init` was not forced, or
/// if the file cannot be written or serialized.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(config.to_yaml()?.trim_end().to_string()),
        },
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(TaskhintError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }

            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            log::info!("wrote {}", paths.config_file.display());
            Ok(format!(
                "{} {}",
                "Wrote".green().bold(),
                paths.config_file.display()
            ))
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
    }
}
