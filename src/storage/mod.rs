use std::sync::Arc;

use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod memory;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStorage;
pub use models::ShortLink;
pub use traits::{InsertOutcome, LinkGateway};

/// URL scheme selecting the in-process store.
pub const MEMORY_URL: &str = "memory://";

pub struct StorageFactory;

impl StorageFactory {
    /// Build the gateway named by `database.database_url`.
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn LinkGateway>> {
        let database_url = config.database_url.as_str();

        if database_url == MEMORY_URL {
            info!("Using in-memory link store; records are lost on exit");
            return Ok(Arc::new(MemoryStorage::new()));
        }

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = SeaOrmStorage::new(database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}
