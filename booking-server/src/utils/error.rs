//! 应用错误类型
//!
//! [`AppError`] 是 HTTP 边界的统一错误类型，实现 [`IntoResponse`]，
//! 把内部错误映射为带 JSON body 的状态码。
//!
//! | 变体 | 状态码 | error 字段 |
//! |------|--------|-----------|
//! | NotFound | 404 | not_found |
//! | Validation | 400 | validation_error |
//! | InsufficientSpaces | 409 | insufficient_spaces |
//! | Database | 500 | database_error |
//! | Internal | 500 | internal_error |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::booking::OrderError;
use crate::db::repository::RepoError;

/// 应用错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Insufficient spaces: {0}")]
    InsufficientSpaces(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            AppError::InsufficientSpaces(msg) => {
                (StatusCode::CONFLICT, "insufficient_spaces", msg.clone())
            }
            // 内部细节只进日志，不回给客户端
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            e @ RepoError::InsufficientSpaces { .. } => AppError::InsufficientSpaces(e.to_string()),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => AppError::Validation(msg),
            OrderError::LessonNotFound(id) => AppError::NotFound(format!("Lesson {id} not found")),
            e @ OrderError::InsufficientSpaces { .. } => {
                AppError::InsufficientSpaces(e.to_string())
            }
            OrderError::Store(repo) => repo.into(),
        }
    }
}
