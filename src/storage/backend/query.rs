//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::converters::model_to_shortlink;
use super::{SeaOrmStorage, retry};
use crate::errors::{LinksyError, Result};
use crate::storage::ShortLink;

use migration::entities::short_link;

impl SeaOrmStorage {
    pub async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
        let db = &self.db;
        let code_owned = code.to_string();

        let model = retry::with_retry(&format!("get({})", code), self.retry_config, || async {
            short_link::Entity::find_by_id(code_owned.clone()).one(db).await
        })
        .await
        .map_err(|e| LinksyError::database_operation(format!("查询短链接失败: {}", e)))?;

        Ok(exact_key(model, code).map(model_to_shortlink))
    }

    /// 按目标地址查找，多条记录时返回最早创建的一条
    pub async fn get_by_target(&self, target: &str) -> Result<Option<ShortLink>> {
        let db = &self.db;
        let target_owned = target.to_string();

        let model = retry::with_retry("get_by_target", self.retry_config, || async {
            short_link::Entity::find()
                .filter(short_link::Column::TargetUrl.eq(target_owned.clone()))
                .order_by_asc(short_link::Column::CreatedAt)
                .order_by_asc(short_link::Column::ShortCode)
                .one(db)
                .await
        })
        .await
        .map_err(|e| LinksyError::database_operation(format!("按目标地址查询失败: {}", e)))?;

        Ok(model.map(model_to_shortlink))
    }

    pub async fn count(&self) -> Result<u64> {
        let db = &self.db;

        retry::with_retry("count", self.retry_config, || async {
            short_link::Entity::find().count(db).await
        })
        .await
        .map_err(|e| LinksyError::database_operation(format!("统计短链接数量失败: {}", e)))
    }
}

/// 默认排序规则不区分大小写的后端（如 MySQL）会把 "ab" 匹配到 "AB"
fn exact_key(model: Option<short_link::Model>, code: &str) -> Option<short_link::Model> {
    model.filter(|m| m.short_code == code)
}
