//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 (含库存模式) | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "mode": "fallback",
//!   "lesson_count": 10
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::inventory::InventoryMode;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 库存模式 (connected | fallback)
    mode: InventoryMode,
    /// 当前课程数量
    lesson_count: usize,
}

/// 基础健康检查
///
/// Fallback 模式下读内存永远成功；Connected 模式下数据库不可达时报告
/// degraded 而不是报错
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let (status, lesson_count) = match state.inventory.lessons().await {
        Ok(lessons) => ("healthy", lessons.len()),
        Err(_) => ("degraded", 0),
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        mode: state.inventory.mode(),
        lesson_count,
    })
}
