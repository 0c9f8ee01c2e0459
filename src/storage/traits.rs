use async_trait::async_trait;

use super::ShortLink;
use crate::errors::Result;

/// Outcome of a conditional insert.
///
/// A conflict is ordinary control flow for the caller, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(ShortLink),
    /// Another record already holds the key
    Conflict,
}

/// Atomic store operations consumed by key assignment.
///
/// `insert_if_absent` must be atomic and enforce key uniqueness; every
/// other read may be stale under concurrency.
#[async_trait]
pub trait LinkGateway: Send + Sync {
    async fn count_records(&self) -> Result<u64>;

    /// Earliest-created record for `target`, if any.
    async fn find_by_target(&self, target: &str) -> Result<Option<ShortLink>>;

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>>;

    async fn insert_if_absent(&self, key: &str, target: &str) -> Result<InsertOutcome>;

    /// 后端名称（用于健康检查和日志）
    fn backend_name(&self) -> String;
}
