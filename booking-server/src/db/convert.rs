//! 类型转换模块
//!
//! 存储记录与线上模型之间的转换。RecordId 统一转换为 "table:key"
//! 字符串，调用方永远看不到后端原生的 id 结构。

use surrealdb::RecordId;

use crate::db::models::{LessonRecord, OrderItemRecord, OrderRecord};
use crate::models::{Lesson, Order, OrderItem};

/// Convert a RecordId to its canonical "table:key" string form
pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

/// Convert an optional RecordId, defaulting to empty for unsaved records
pub fn option_record_id_to_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(record_id_to_string).unwrap_or_default()
}

// ============ Lesson conversions ============

impl From<&LessonRecord> for Lesson {
    fn from(record: &LessonRecord) -> Self {
        Self {
            id: option_record_id_to_string(&record.id),
            subject: record.subject.clone(),
            location: record.location.clone(),
            price: record.price,
            spaces: record.spaces,
            description: record.description.clone(),
            image: record.image.clone(),
        }
    }
}

/// Seed data enters the store without an id; SurrealDB assigns one on create
impl From<&Lesson> for LessonRecord {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: None,
            subject: lesson.subject.clone(),
            location: lesson.location.clone(),
            price: lesson.price,
            spaces: lesson.spaces,
            description: lesson.description.clone(),
            image: lesson.image.clone(),
        }
    }
}

// ============ Order conversions ============

impl From<&OrderItemRecord> for OrderItem {
    fn from(record: &OrderItemRecord) -> Self {
        Self {
            lesson_id: record.lesson_id.clone(),
            quantity: record.quantity,
        }
    }
}

impl From<&OrderItem> for OrderItemRecord {
    fn from(item: &OrderItem) -> Self {
        Self {
            lesson_id: item.lesson_id.clone(),
            quantity: item.quantity,
        }
    }
}

impl From<&OrderRecord> for Order {
    fn from(record: &OrderRecord) -> Self {
        Self {
            id: option_record_id_to_string(&record.id),
            name: record.name.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            items: record.items.iter().map(OrderItem::from).collect(),
            total: record.total,
            created_at: record.created_at,
        }
    }
}
