//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Linksy - deterministic URL shortener
#[derive(Parser)]
#[command(name = "linksy")]
#[command(version)]
#[command(about = "Deterministic prime-length URL shortener", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create (or reuse) the short key for a URL
    Shorten {
        /// Target URL (http or https)
        url: String,
    },

    /// Print the target a key points to
    Resolve {
        /// Short key
        key: String,
    },

    /// Show backend and record count
    Stats,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
