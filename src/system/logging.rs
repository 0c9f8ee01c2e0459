//! Logging system initialization
//!
//! Installs the global tracing subscriber from `[logging]` config.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Stdout,
    File(&'a str),
    Rolling { dir: &'a Path, prefix: &'a str },
}

fn resolve_target(config: &LoggingConfig) -> LogTarget<'_> {
    match config.file.as_deref() {
        None | Some("") => LogTarget::Stdout,
        Some(file) if config.enable_rotation => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("linksy.log")
                .trim_end_matches(".log");
            LogTarget::Rolling { dir, prefix }
        }
        Some(file) => LogTarget::File(file),
    }
}

/// Initialize the logging system.
///
/// Call once, after configuration is loaded. The returned guard must be
/// kept alive for the life of the process so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let target = resolve_target(config);
    let use_ansi = target == LogTarget::Stdout;

    let writer: Box<dyn std::io::Write + Send + Sync> = match target {
        LogTarget::Stdout => Box::new(std::io::stdout()),
        LogTarget::File(file) => Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .with_context(|| format!("Failed to open log file {}", file))?,
        ),
        LogTarget::Rolling { dir, prefix } => Box::new(
            rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .context("Failed to create rolling log appender")?,
        ),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(use_ansi);

    let installed = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
