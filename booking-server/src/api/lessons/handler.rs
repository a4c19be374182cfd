//! Lesson API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::models::{Lesson, LessonUpdate};
use crate::search::filter_lessons;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text,
};
use crate::utils::{AppError, AppResult};

/// GET /search 查询参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /lessons - 获取所有课程
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = state.inventory.lessons().await?;
    Ok(Json(lessons))
}

/// GET /lessons/{id} - 获取单个课程
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Lesson>> {
    let lesson = state.inventory.lesson(&id).await?;
    Ok(Json(lesson))
}

/// GET /search?q=... - 课程子串搜索
///
/// q 缺省或为空时等价于 GET /lessons
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = state.inventory.lessons().await?;
    let query = params.q.unwrap_or_default();
    Ok(Json(filter_lessons(lessons, &query)))
}

/// PUT /lessons/{id} - 稀疏更新课程字段
///
/// 只接受六个已知字段，未知字段忽略；空 patch 和负价格是验证错误
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LessonUpdate>,
) -> AppResult<Json<Lesson>> {
    if payload.is_empty() {
        return Err(AppError::validation(
            "update must include at least one known field",
        ));
    }
    if let Some(price) = payload.price
        && price < 0.0
    {
        return Err(AppError::validation("price must not be negative"));
    }
    validate_optional_text(&payload.subject, "subject", MAX_NAME_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

    let lesson = state.inventory.update_lesson(&id, payload).await?;
    Ok(Json(lesson))
}
