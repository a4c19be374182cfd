//! Lesson API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /lessons | GET | 获取所有课程 |
//! | /lessons/{id} | GET | 获取单个课程 |
//! | /lessons/{id} | PUT | 稀疏更新课程字段 |
//! | /search?q= | GET | 课程子串搜索 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/lessons", get(handler::list))
        .route(
            "/lessons/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route("/search", get(handler::search))
}
