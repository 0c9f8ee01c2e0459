use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::LinkGateway;

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Resolves once Ctrl+C arrives (or the listener fails) and the store has
/// been probed one last time.
pub async fn listen_for_shutdown(gateway: &dyn LinkGateway) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    // 记录关闭时的记录数，方便排查
    match timeout(
        Duration::from_secs(SHUTDOWN_TIMEOUT_SECS),
        gateway.count_records(),
    )
    .await
    {
        Ok(Ok(count)) => info!(
            "Store '{}' holds {} records at shutdown",
            gateway.backend_name(),
            count
        ),
        Ok(Err(e)) => error!("Final store check failed: {}", e),
        Err(_) => error!(
            "Final store check timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
