//! Repository Module
//!
//! CRUD operations for SurrealDB tables.

pub mod lesson;
pub mod order;

pub use lesson::LessonRepository;
pub use order::OrderRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Lesson {lesson_id} has {available} spaces left, requested {requested}")]
    InsufficientSpaces {
        lesson_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Strip a `table:` prefix when present, returning the bare record key.
/// Lookups accept both the normalized "table:key" form and the bare key.
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        _ => id,
    }
}

/// Base repository holding the shared database handle
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_table_prefix_accepts_both_forms() {
        assert_eq!(strip_table_prefix("lesson", "lesson:abc123"), "abc123");
        assert_eq!(strip_table_prefix("lesson", "abc123"), "abc123");
    }

    #[test]
    fn strip_table_prefix_leaves_foreign_prefixes_alone() {
        assert_eq!(strip_table_prefix("lesson", "order:abc123"), "order:abc123");
    }
}
