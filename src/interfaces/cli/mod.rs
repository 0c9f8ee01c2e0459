//! CLI interface module
//!
//! One-shot commands run against the configured store directly; they share
//! `LinkService` with the server, so the same keys come out either way.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LinksyError;
use crate::runtime::lifetime::startup::{StartupContext, prepare_startup};
use commands::{config_generate, resolve_key, shorten_url, show_stats};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinksyError> for CliError {
    fn from(err: LinksyError) -> Self {
        match err {
            LinksyError::Validation(msg) => CliError::ParseError(msg),
            e if e.is_store_error() => CliError::StorageError(e.to_string()),
            e => CliError::CommandError(e.to_string()),
        }
    }
}

async fn startup(config: &StaticConfig) -> Result<StartupContext, CliError> {
    prepare_startup(config)
        .await
        .map_err(|e| CliError::StorageError(format!("{:#}", e)))
}

/// Run a one-shot CLI command. `Serve` is handled by the caller.
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Serve => Err(CliError::CommandError(
            "serve is not a one-shot command".to_string(),
        )),
        // Generate 不需要连接数据库
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::Shorten { url } => {
            let ctx = startup(config).await?;
            shorten_url(&ctx.link_service, &ctx.url_builder, &url).await
        }
        Commands::Resolve { key } => {
            let ctx = startup(config).await?;
            resolve_key(&ctx.link_service, &key).await
        }
        Commands::Stats => {
            let ctx = startup(config).await?;
            show_stats(&ctx.link_service).await
        }
    }
}
