//! Link service
//!
//! Public entry point for key assignment: create-or-reuse a key for a
//! target, and resolve a key back to its target.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ShortenerConfig;
use crate::errors::{LinksyError, Result};
use crate::keygen::{self, CollisionProber};
use crate::storage::{LinkGateway, ShortLink};

/// Result of link creation
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    pub link: ShortLink,
    /// `false` when an existing record was returned without writing
    pub created: bool,
}

/// Service for key assignment and resolution
///
/// Holds no locks; the gateway's conditional insert is the only point of
/// synchronization, so one instance can be shared across workers and
/// several instances can share one store.
pub struct LinkService {
    gateway: Arc<dyn LinkGateway>,
    prober: CollisionProber,
}

impl LinkService {
    pub fn new(gateway: Arc<dyn LinkGateway>, prober: CollisionProber) -> Self {
        Self { gateway, prober }
    }

    pub fn from_config(gateway: Arc<dyn LinkGateway>, config: &ShortenerConfig) -> Self {
        Self::new(gateway, CollisionProber::new(config.max_attempts))
    }

    /// Create a key for `target`, or return the one it already has.
    ///
    /// Writes at most one record, and none on [`LinksyError::Exhausted`].
    /// Input validation is the caller's job.
    pub async fn create_short_link(&self, target: &str) -> Result<LinkCreateResult> {
        // 幂等快速路径：已有记录直接返回
        if let Some(existing) = self.gateway.find_by_target(target).await? {
            debug!("LinkService: reusing '{}' for existing target", existing.code);
            return Ok(LinkCreateResult {
                link: existing,
                created: false,
            });
        }

        let record_count = self.gateway.count_records().await?;
        let start_length = keygen::select_length(record_count);
        let digest = keygen::encode(target);

        let claim = self
            .prober
            .claim(self.gateway.as_ref(), &digest, start_length, target)
            .await?;

        if claim.created {
            info!(
                "LinkService: created '{}' (store held {} records, start length {})",
                claim.link.code, record_count, start_length
            );
        } else {
            debug!("LinkService: probe reused '{}'", claim.link.code);
        }

        Ok(LinkCreateResult {
            link: claim.link,
            created: claim.created,
        })
    }

    /// Resolve `key` to its target. A miss is reported, never retried.
    pub async fn resolve_short_link(&self, key: &str) -> Result<String> {
        self.gateway
            .find_by_key(key)
            .await?
            .map(|link| link.target)
            .ok_or_else(|| LinksyError::not_found(format!("Short link '{}' not found", key)))
    }

    /// Get a single link
    pub async fn get_link(&self, key: &str) -> Result<Option<ShortLink>> {
        self.gateway.find_by_key(key).await
    }

    /// Number of stored records
    pub async fn count(&self) -> Result<u64> {
        self.gateway.count_records().await
    }

    pub fn backend_name(&self) -> String {
        self.gateway.backend_name()
    }
}
