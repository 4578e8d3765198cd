//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;
pub mod script_parser;

use std::path::Path;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;

/// Lockbox CLI: passkey-protected secret storage for a single session.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "Passkey-protected secret storage with retrieval lockout",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./.lockbox.toml if present)
    #[arg(short, long, global = true, env = "LOCKBOX_CONFIG")]
    pub config: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Start an interactive session (insert, retrieve, login)
    Shell,

    /// Run a session script from a file or stdin
    Run {
        /// Script file (reads stdin if omitted)
        file: Option<String>,

        /// Exit with an error if any command in the script failed
        #[arg(long)]
        strict: bool,
    },

    /// Show version information
    Version,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `--config`, or from `.lockbox.toml` in the cwd.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_file(Path::new(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Settings::load(&cwd)
        }
    }
}
