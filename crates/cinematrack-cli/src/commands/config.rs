use super::prompts;
use super::session::is_interactive;
use crate::output::{Output, OutputFormat};
use cinematrack_config::{Config, PathManager};
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn run_config(
    cmd: crate::ConfigCommands,
    paths: &PathManager,
    config_file: &Path,
    config: &Config,
    output: &Output,
) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(paths, config_file, config, output),
        crate::ConfigCommands::Init { force } => init_config(paths, config_file, force, output),
        crate::ConfigCommands::Path => {
            match output.format() {
                OutputFormat::Human => output.println(config_file.display().to_string()),
                OutputFormat::Json | OutputFormat::JsonPretty => output.document("config_path", json!({
                    "config_file": config_file.display().to_string(),
                    "exists": config_file.exists(),
                })),
            }
            Ok(())
        }
    }
}

fn show_config(paths: &PathManager, config_file: &Path, config: &Config, output: &Output) -> Result<()> {
    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.println("Showing defaults. Run 'cinematrack config init' to write them to disk.");
    }

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL);
            table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
            table.set_header(vec![
                Cell::new("Setting").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
            table.add_row(vec![Cell::new("Log Directory"), Cell::new(paths.log_dir().display())]);
            table.add_row(vec![
                Cell::new("ui.color"),
                Cell::new(if config.ui.color { "✓" } else { "✗" }).fg(if config.ui.color { Color::Green } else { Color::Red }),
            ]);
            table.add_row(vec![Cell::new("ui.show_ids"), Cell::new(config.ui.show_ids)]);
            table.add_row(vec![Cell::new("ui.prompt"), Cell::new(format!("{:?}", config.ui.prompt))]);
            table.add_row(vec![Cell::new("logging.level"), Cell::new(&config.logging.level)]);
            table.add_row(vec![Cell::new("logging.json"), Cell::new(config.logging.json)]);
            table.add_row(vec![
                Cell::new("logging.file"),
                Cell::new(
                    config
                        .logging
                        .resolve_file(paths.log_dir())
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(stderr)".to_string()),
                ),
            ]);

            println!("\n{}", "Configuration".bright_cyan().bold());
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let value = serde_json::to_value(config)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize config: {}", e))?;
            output.document("config", json!({
                "config_file": config_file.display().to_string(),
                "config_dir": paths.config_dir().display().to_string(),
                "log_dir": paths.log_dir().display().to_string(),
                "config": value,
            }));
        }
    }

    Ok(())
}

fn init_config(paths: &PathManager, config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        let overwrite = is_interactive()
            && prompts::prompt_yes_no(
                &format!("{} already exists. Overwrite with defaults?", config_file.display()),
                Some(false),
            )?;
        if !overwrite {
            output.warn(format!(
                "Configuration already exists at {}. Use --force to overwrite",
                config_file.display()
            ));
            return Ok(());
        }
    }

    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create {}: {}", paths.config_dir().display(), e))?;
    Config::default()
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
