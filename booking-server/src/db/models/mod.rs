//! Database Models
//!
//! Store-native record shapes with SurrealDB [`RecordId`](surrealdb::RecordId)
//! identifiers. Conversions to the wire models live in [`crate::db::convert`].

pub mod lesson;
pub mod order;

pub use lesson::LessonRecord;
pub use order::{OrderItemRecord, OrderRecord};
