mod action;
mod app;
mod cli;
mod components;
mod compose;
mod config;
mod error;
mod event;
mod input;
mod logging;
mod validation;

use color_eyre::eyre::Result;
use cli::Cli;
use config::{ConfigManager, Theme};
use error::DisplayNameError;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse_args();

    if let Some(dir) = &cli.config {
        if !dir.exists() && !cli.write_default_config {
            return Err(DisplayNameError::ConfigNotFound { path: dir.clone() }.into());
        }
    }

    let mut config_manager = ConfigManager::new(cli.config.as_deref())?;

    if cli.write_default_config {
        for path in config_manager.write_default_configs()? {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    // CLI flags win over config files
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config_manager.app_config().general.log_level.clone());
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config_manager.app_config().general.log_file.clone())
        .unwrap_or_else(logging::default_log_path);
    let _log_guard = logging::initialize(&log_level, &log_file)?;

    if cli.novalidate {
        config_manager.app_config_mut().form.novalidate = true;
    }
    if let Some(name) = &cli.theme {
        match Theme::by_name(name) {
            Some(theme) => config_manager.set_theme(theme),
            None => tracing::warn!("Unknown theme '{}', keeping {}", name, config_manager.theme().name),
        }
    }

    tracing::info!(
        config_dir = %config_manager.config_dir().display(),
        "Starting display-name {}",
        env!("CARGO_PKG_VERSION")
    );

    let mut app = app::App::new(config_manager)?;
    app.run()?;

    Ok(())
}
