//! CLI mode
//!
//! This module contains the CLI mode startup logic and the implementation
//! of the configuration management commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::{Result, WorkdeckError};

/// Run a CLI command from clap-parsed input
///
/// `config_path` is the global `--config` flag, used by commands that load
/// the effective configuration.
pub async fn run_cli(command: Commands, config_path: Option<&str>) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
            ConfigCommands::Show { json } => config_show(config_path, json),
        },
    }
}

/// Generate example configuration file
fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input).unwrap();
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    let config = AppConfig::default();
    match config.save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Please edit the configuration file and restart the service".yellow()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(WorkdeckError::file_operation(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

/// Print the effective configuration after merging file, env and defaults
fn config_show(config_path: Option<&str>, json: bool) -> Result<()> {
    let config = AppConfig::load(config_path);

    let rendered = if json {
        serde_json::to_string_pretty(&config)?
    } else {
        toml::to_string_pretty(&config)
            .map_err(|e| WorkdeckError::serialization(e.to_string()))?
    };

    println!("{}", rendered);
    Ok(())
}
