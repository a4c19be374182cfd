//! 服务器状态

use crate::core::Config;
use crate::db::DbService;
use crate::inventory::{Inventory, InventoryMode};

/// 服务器状态 - 所有 handler 共享
///
/// Inventory 内部是连接句柄或 Arc 引用，Clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (启动后不可变) |
/// | inventory | Inventory | 课程库存 (Connected / Fallback) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub inventory: Inventory,
}

impl ServerState {
    pub fn new(config: Config, inventory: Inventory) -> Self {
        Self { config, inventory }
    }

    /// 初始化服务器状态
    ///
    /// 尝试连接 SurrealDB；连接失败时降级为内存库存，进程不会因为
    /// 数据库不可用而退出。模式在进程生命周期内不再改变。
    pub async fn initialize(config: &Config) -> Self {
        let inventory = match DbService::connect(config).await {
            Ok(service) => {
                tracing::info!("✅ Connected to SurrealDB, lesson inventory is persistent");
                Inventory::connected(service.db)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "❌ Persistent store unavailable, falling back to in-memory demo inventory"
                );
                Inventory::fallback()
            }
        };

        Self::new(config.clone(), inventory)
    }

    /// 当前库存模式
    pub fn mode(&self) -> InventoryMode {
        self.inventory.mode()
    }
}
