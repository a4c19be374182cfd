//! Order Repository

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::OrderRecord;

const TABLE: &str = "order";

/// Order repository. Orders are append-only; there is no update or delete.
#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 创建订单记录
    pub async fn create(&self, record: OrderRecord) -> RepoResult<OrderRecord> {
        let created: Option<OrderRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }
}
