use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use catalog_config::{Config, PathManager, API_URL_ENV};
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use serde_json::json;
use std::path::Path;

/// Values given on the command line, applied last.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub page_size: Option<usize>,
}

/// File (or defaults), then `VIDLY_API_URL`, then command-line flags.
pub fn load_effective_config(overrides: &Overrides) -> Result<Config> {
    let path_manager = PathManager::default();
    load_effective_config_from(&path_manager.config_file(), overrides)
}

pub fn load_effective_config_from(config_file: &Path, overrides: &Overrides) -> Result<Config> {
    let mut config = Config::load_or_default(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    config.apply_env_overrides();
    apply_overrides(&mut config, overrides);

    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;

    tracing::debug!(
        base_url = %config.api.base_url,
        page_size = config.catalog.page_size,
        "Effective configuration"
    );
    Ok(config)
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    config.apply_api_url_override(overrides.api_url.clone());
    if let Some(page_size) = overrides.page_size {
        config.catalog.page_size = page_size;
    }
}

pub fn run_config(cmd: ConfigCommands, overrides: &Overrides, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(overrides, output),
        ConfigCommands::Init { force } => init_config(force, output),
        ConfigCommands::Path => {
            let config_file = PathManager::default().config_file();
            match output.format() {
                OutputFormat::Human => output.info(config_file.display().to_string()),
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.json(&json!({ "config_file": config_file.display().to_string() }))
                }
            }
            Ok(())
        }
    }
}

fn show_config(overrides: &Overrides, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = load_effective_config_from(&config_file, overrides)?;

    match output.format() {
        OutputFormat::Human => {
            if !config_file.exists() {
                output.warn(format!(
                    "No config file at {}; showing defaults. Run 'vidly config init' to create one.",
                    config_file.display()
                ));
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
                Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display().to_string())]);
            table.add_row(vec![Cell::new("API Base URL"), Cell::new(&config.api.base_url)]);
            table.add_row(vec![Cell::new("Movies Endpoint"), Cell::new(config.api.movies_url())]);
            table.add_row(vec![Cell::new("Genres Endpoint"), Cell::new(config.api.genres_url())]);
            table.add_row(vec![Cell::new("Timeout"), Cell::new(format!("{}s", config.api.timeout_seconds))]);
            table.add_row(vec![Cell::new("Page Size"), Cell::new(config.catalog.page_size)]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            output.block(table.to_string());

            if std::env::var(API_URL_ENV).is_ok() {
                output.info(format!("{} is set and overrides api.base_url", API_URL_ENV));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": config_file.exists(),
                "api": {
                    "base_url": config.api.base_url,
                    "movies_url": config.api.movies_url(),
                    "genres_url": config.api.genres_url(),
                    "timeout_seconds": config.api.timeout_seconds,
                },
                "catalog": {
                    "page_size": config.catalog.page_size,
                },
            }));
        }
    }

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite it.",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create {}: {}", path_manager.config_dir().display(), e))?;

    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
