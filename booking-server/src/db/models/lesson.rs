//! Lesson Record

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Lesson record as stored in SurrealDB.
///
/// `spaces` never goes below zero: the only decrement path is the conditional
/// update in [`LessonRepository::reserve_spaces`](crate::db::repository::LessonRepository::reserve_spaces).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRecord {
    /// None before creation; SurrealDB assigns the id on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub subject: String,
    pub location: String,
    pub price: f64,
    pub spaces: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}
