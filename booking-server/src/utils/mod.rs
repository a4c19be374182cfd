//! 工具模块 - 错误类型、日志和输入验证

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
