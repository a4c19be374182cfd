//! Input validation helpers
//!
//! Centralized text length limits and the validation functions shared by the
//! lesson handlers and the booking service.

use crate::booking::OrderError;
use crate::utils::AppError;

/// Booker names, lesson subjects and locations
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321 upper bound)
pub const MAX_EMAIL_LEN: usize = 254;

/// Lesson descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Image paths and URLs
pub const MAX_URL_LEN: usize = 2048;

/// Validate that an optional field, when present, stays within the limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(text) = value
        && text.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            text.len()
        )));
    }
    Ok(())
}

/// Validate a required order field: non-empty after trimming, within the limit.
pub fn validate_order_text(value: &str, field: &str, max_len: usize) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(OrderError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional order field, when present, against the limit.
pub fn validate_order_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), OrderError> {
    if let Some(text) = value
        && text.len() > max_len
    {
        return Err(OrderError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            text.len()
        )));
    }
    Ok(())
}
