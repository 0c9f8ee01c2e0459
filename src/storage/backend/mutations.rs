//! Mutation operations for SeaOrmStorage
//!
//! Records are only ever inserted. The primary key on `short_code` is the
//! uniqueness arbiter; a duplicate-key rejection is reported as
//! [`InsertOutcome::Conflict`] rather than an error.

use sea_orm::{DbErr, EntityTrait, SqlErr};
use tracing::{debug, info};

use super::converters::shortlink_to_active_model;
use super::{SeaOrmStorage, retry};
use crate::errors::{LinksyError, Result};
use crate::storage::{InsertOutcome, ShortLink};

use migration::entities::short_link;

/// 是否为唯一约束冲突
pub(super) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl SeaOrmStorage {
    pub async fn insert_new(&self, code: &str, target: &str) -> Result<InsertOutcome> {
        let db = &self.db;
        let link = ShortLink::new(code, target);
        let active_model = shortlink_to_active_model(&link);

        // 插入不是幂等的，连接中途断开时不重试
        let result = retry::with_retry_if(
            &format!("insert({})", code),
            self.retry_config,
            retry::is_safe_to_reissue,
            || async {
                short_link::Entity::insert(active_model.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await;

        match result {
            Ok(_) => {
                info!("Short link created: {} -> {}", link.code, truncate(&link.target));
                Ok(InsertOutcome::Inserted(link))
            }
            Err(e) if is_unique_violation(&e) => {
                debug!("Insert of '{}' rejected by unique constraint", code);
                Ok(InsertOutcome::Conflict)
            }
            Err(e) => Err(LinksyError::database_operation(format!(
                "插入短链接 '{}' 失败 (target: {}): {}",
                code,
                truncate(target),
                e
            ))),
        }
    }
}

fn truncate(target: &str) -> String {
    match target.char_indices().nth(50) {
        Some((idx, _)) => format!("{}...", &target[..idx]),
        None => target.to_string(),
    }
}
