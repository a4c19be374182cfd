//! 核心模块 - 服务器配置、状态和启动
//!
//! - [`Config`] - 服务器配置 (环境变量)
//! - [`ServerState`] - 服务器状态 (配置 + 库存后端)
//! - [`Server`] - HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app};
pub use state::ServerState;
