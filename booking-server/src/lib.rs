//! Booking Server - 课程预订后端
//!
//! # 架构概述
//!
//! - **库存** (`inventory`): 双模式课程库存 - SurrealDB 持久化或内存降级
//! - **预订** (`booking`): 订单校验和全有或全无的名额预留
//! - **搜索** (`search`): 课程子串过滤
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器启动
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 下单服务和可订策略
//! ├── inventory/     # 双模式库存 (含种子数据)
//! ├── search.rs      # 课程搜索
//! ├── models/        # 线上数据模型
//! ├── db/            # SurrealDB 数据层
//! └── utils/         # 错误、日志、验证
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod inventory;
pub mod models;
pub mod search;
pub mod utils;

pub use booking::{BookingService, OrderError};
pub use core::{Config, Server, ServerState, build_app};
pub use inventory::{Inventory, InventoryMode};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在 [`Config::from_env`] 之前调用，保证 .env 中的变量生效
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

/// 打印启动横幅
pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
"#
    );
}
