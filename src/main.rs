use clap::Parser;

use linksy::cli::{Cli, Commands};
use linksy::config::{LoggingConfig, get_config, init_config_from};
use linksy::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(cli.config.as_deref());
    let config = get_config();

    match cli.command {
        None | Some(Commands::Serve) => run_server_mode(&config).await,
        Some(cmd) => run_cli_mode(cmd, &config).await,
    }
}

#[cfg(feature = "server")]
async fn run_server_mode(config: &linksy::config::StaticConfig) -> anyhow::Result<()> {
    let _guard = init_logging(&config.logging)?;
    linksy::runtime::modes::run_server(config).await
}

#[cfg(not(feature = "server"))]
async fn run_server_mode(_config: &linksy::config::StaticConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `server` feature")
}

#[cfg(feature = "cli")]
async fn run_cli_mode(cmd: Commands, config: &linksy::config::StaticConfig) -> anyhow::Result<()> {
    // 命令输出走 stdout，日志只保留警告以上
    let quiet = LoggingConfig {
        level: "warn".to_string(),
        ..config.logging.clone()
    };
    let guard = init_logging(&quiet)?;

    let result = linksy::interfaces::cli::run_cli_command(cmd, config).await;
    drop(guard);

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
async fn run_cli_mode(_cmd: Commands, _config: &linksy::config::StaticConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `cli` feature")
}
