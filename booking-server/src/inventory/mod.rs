//! 库存模块 - 双模式课程库存
//!
//! 所有课程和订单的读写都经过 [`Inventory`]，由它分发到两种后端之一：
//!
//! | 模式 | 后端 | 持久性 |
//! |------|------|--------|
//! | Connected | SurrealDB | 跨重启持久 |
//! | Fallback | 进程内存 (种子数据) | 进程生命周期 |
//!
//! 模式在启动时确定一次，进程运行期间不再切换。调用方通过
//! [`Inventory::mode`] 读取当前模式。

pub mod memory;
pub mod seed;

pub use memory::MemoryInventory;

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::db::models::OrderRecord;
use crate::db::repository::{LessonRepository, OrderRepository, RepoError, RepoResult};
use crate::models::{Lesson, LessonUpdate, Order, OrderCreate};

/// 库存后端模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryMode {
    Connected,
    Fallback,
}

impl InventoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for InventoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 课程库存
///
/// Clone 成本极低：Connected 持有 SurrealDB 连接句柄，Fallback 内部是
/// Arc 引用，克隆共享同一份状态。
#[derive(Clone, Debug)]
pub enum Inventory {
    /// SurrealDB 持久化存储
    Connected(Surreal<Any>),
    /// 内存降级存储 (演示模式)
    Fallback(MemoryInventory),
}

impl Inventory {
    pub fn connected(db: Surreal<Any>) -> Self {
        Self::Connected(db)
    }

    /// 带种子数据的内存库存
    pub fn fallback() -> Self {
        Self::Fallback(MemoryInventory::with_seed())
    }

    pub fn mode(&self) -> InventoryMode {
        match self {
            Self::Connected(_) => InventoryMode::Connected,
            Self::Fallback(_) => InventoryMode::Fallback,
        }
    }

    /// 获取所有课程
    pub async fn lessons(&self) -> RepoResult<Vec<Lesson>> {
        match self {
            Self::Connected(db) => {
                let records = LessonRepository::new(db.clone()).find_all().await?;
                Ok(records.iter().map(Lesson::from).collect())
            }
            Self::Fallback(memory) => Ok(memory.lessons()),
        }
    }

    /// 按 id 获取单个课程
    pub async fn lesson(&self, id: &str) -> RepoResult<Lesson> {
        match self {
            Self::Connected(db) => {
                let record = LessonRepository::new(db.clone())
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))?;
                Ok(Lesson::from(&record))
            }
            Self::Fallback(memory) => memory.lesson(id),
        }
    }

    /// 稀疏更新课程字段
    pub async fn update_lesson(&self, id: &str, data: LessonUpdate) -> RepoResult<Lesson> {
        match self {
            Self::Connected(db) => {
                let record = LessonRepository::new(db.clone()).update(id, data).await?;
                Ok(Lesson::from(&record))
            }
            Self::Fallback(memory) => memory.update_lesson(id, &data),
        }
    }

    /// 预留名额 - 唯一的扣减路径
    ///
    /// Connected 模式由单条条件 UPDATE 保证原子性，Fallback 模式由写锁
    /// 保证。两种实现下 spaces 都不可能变成负数。
    pub async fn reserve_spaces(&self, id: &str, quantity: u32) -> RepoResult<Lesson> {
        match self {
            Self::Connected(db) => {
                let record = LessonRepository::new(db.clone())
                    .reserve_spaces(id, quantity)
                    .await?;
                Ok(Lesson::from(&record))
            }
            Self::Fallback(memory) => memory.reserve_spaces(id, quantity),
        }
    }

    /// 释放名额 - 预留的逆操作，订单失败回滚时调用
    pub async fn release_spaces(&self, id: &str, quantity: u32) -> RepoResult<Lesson> {
        match self {
            Self::Connected(db) => {
                let record = LessonRepository::new(db.clone())
                    .release_spaces(id, quantity)
                    .await?;
                Ok(Lesson::from(&record))
            }
            Self::Fallback(memory) => memory.release_spaces(id, quantity),
        }
    }

    /// 持久化订单
    pub async fn create_order(&self, doc: OrderCreate) -> RepoResult<Order> {
        match self {
            Self::Connected(db) => {
                let record = OrderRepository::new(db.clone())
                    .create(OrderRecord::new(doc))
                    .await?;
                Ok(Order::from(&record))
            }
            Self::Fallback(memory) => Ok(memory.create_order(doc)),
        }
    }
}
