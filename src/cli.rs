//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for workdeck using clap's derive macros.

use clap::{Parser, Subcommand};

/// Workdeck - workspace dashboard service
#[derive(Parser)]
#[command(name = "workdeck")]
#[command(version)]
#[command(about = "Workspace dashboard service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// No subcommand starts the HTTP server.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration (file + env + defaults)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
