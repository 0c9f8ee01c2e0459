use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::ShortUrlBuilder;
use crate::config::StaticConfig;
use crate::services::LinkService;
use crate::storage::{LinkGateway, StorageFactory};

pub struct StartupContext {
    pub gateway: Arc<dyn LinkGateway>,
    pub link_service: Arc<LinkService>,
    pub url_builder: ShortUrlBuilder,
}

/// 准备启动上下文：存储、LinkService 和短链接格式
///
/// Shared by the server and the one-shot CLI commands.
pub async fn prepare_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let gateway = StorageFactory::create(&config.database)
        .await
        .context("Failed to initialize storage backend")?;
    info!("Using storage backend: {}", gateway.backend_name());

    let link_service = Arc::new(LinkService::from_config(gateway.clone(), &config.shortener));
    let url_builder = ShortUrlBuilder::from_config(&config.shortener);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        gateway,
        link_service,
        url_builder,
    })
}
