//! In-memory inventory backend
//!
//! Seeded fallback used when SurrealDB is unreachable at startup. All state
//! lives for the process lifetime only; a restart reloads the seed set.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::seed;
use crate::db::repository::{RepoError, RepoResult};
use crate::models::{Lesson, LessonUpdate, Order, OrderCreate};

/// 内存库存 - Connected 不可用时的降级后端
///
/// 内部是 Arc 共享的读写锁，克隆后仍操作同一份课程和订单。
#[derive(Clone, Debug)]
pub struct MemoryInventory {
    lessons: Arc<RwLock<Vec<Lesson>>>,
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MemoryInventory {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons: Arc::new(RwLock::new(lessons)),
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 加载种子课程的内存库存
    pub fn with_seed() -> Self {
        Self::new(seed::sample_lessons())
    }

    pub fn lessons(&self) -> Vec<Lesson> {
        self.lessons.read().clone()
    }

    pub fn lesson(&self, id: &str) -> RepoResult<Lesson> {
        self.lessons
            .read()
            .iter()
            .find(|lesson| lesson.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))
    }

    pub fn update_lesson(&self, id: &str, data: &LessonUpdate) -> RepoResult<Lesson> {
        let mut lessons = self.lessons.write();
        let lesson = lessons
            .iter_mut()
            .find(|lesson| lesson.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))?;
        data.apply_to(lesson);
        Ok(lesson.clone())
    }

    /// Atomically decrement `spaces`. The write lock is held across the
    /// read-modify-write, so concurrent reservations serialize and the count
    /// can never go negative.
    pub fn reserve_spaces(&self, id: &str, quantity: u32) -> RepoResult<Lesson> {
        let mut lessons = self.lessons.write();
        let lesson = lessons
            .iter_mut()
            .find(|lesson| lesson.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))?;

        if lesson.spaces < quantity {
            return Err(RepoError::InsufficientSpaces {
                lesson_id: id.to_string(),
                requested: quantity,
                available: lesson.spaces,
            });
        }

        lesson.spaces -= quantity;
        Ok(lesson.clone())
    }

    /// Inverse of [`reserve_spaces`](Self::reserve_spaces), used for rollback
    pub fn release_spaces(&self, id: &str, quantity: u32) -> RepoResult<Lesson> {
        let mut lessons = self.lessons.write();
        let lesson = lessons
            .iter_mut()
            .find(|lesson| lesson.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))?;
        lesson.spaces += quantity;
        Ok(lesson.clone())
    }

    pub fn create_order(&self, doc: OrderCreate) -> Order {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            name: doc.name,
            phone: doc.phone,
            email: doc.email,
            items: doc.items,
            total: doc.total,
            created_at: Utc::now(),
        };
        self.orders.write().push(order.clone());
        order
    }

    /// 已落单的订单 (仅进程内)
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderItem;

    #[test]
    fn seeded_inventory_has_fixed_ids_and_spaces() {
        let memory = MemoryInventory::with_seed();
        let lessons = memory.lessons();
        assert_eq!(lessons.len(), 10);
        assert_eq!(lessons[0].id, "1");
        assert_eq!(lessons[0].subject, "Math");
        assert!(lessons.iter().all(|l| l.spaces == 5));
    }

    #[test]
    fn reserve_decrements_spaces() {
        let memory = MemoryInventory::with_seed();
        let after = memory.reserve_spaces("1", 3).unwrap();
        assert_eq!(after.spaces, 2);
        assert_eq!(memory.lesson("1").unwrap().spaces, 2);
    }

    #[test]
    fn reserve_more_than_available_fails_and_changes_nothing() {
        let memory = MemoryInventory::with_seed();
        let err = memory.reserve_spaces("1", 99).unwrap_err();
        match err {
            RepoError::InsufficientSpaces {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 99);
                assert_eq!(available, 5);
            }
            other => panic!("expected InsufficientSpaces, got {other:?}"),
        }
        assert_eq!(memory.lesson("1").unwrap().spaces, 5);
    }

    #[test]
    fn reserve_unknown_lesson_is_not_found() {
        let memory = MemoryInventory::with_seed();
        assert!(matches!(
            memory.reserve_spaces("999", 1),
            Err(RepoError::NotFound(_))
        ));
    }

    #[test]
    fn release_undoes_a_reservation() {
        let memory = MemoryInventory::with_seed();
        memory.reserve_spaces("1", 3).unwrap();
        let restored = memory.release_spaces("1", 3).unwrap();
        assert_eq!(restored.spaces, 5);
    }

    #[test]
    fn update_patches_only_the_given_fields() {
        let memory = MemoryInventory::with_seed();
        let updated = memory
            .update_lesson(
                "1",
                &LessonUpdate {
                    spaces: Some(10),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.spaces, 10);
        assert_eq!(updated.subject, "Math");

        assert!(matches!(
            memory.update_lesson("999", &LessonUpdate::default()),
            Err(RepoError::NotFound(_))
        ));
    }

    #[test]
    fn create_order_assigns_id_and_records_it() {
        let memory = MemoryInventory::with_seed();
        let order = memory.create_order(OrderCreate {
            name: "Kirsten".to_string(),
            phone: "0771234567".to_string(),
            email: None,
            items: vec![OrderItem {
                lesson_id: "1".to_string(),
                quantity: 2,
            }],
            total: 190.0,
        });

        assert!(!order.id.is_empty());
        let orders = memory.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order.id);
    }

    #[test]
    fn concurrent_reserves_never_go_negative() {
        let memory = MemoryInventory::with_seed();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let memory = memory.clone();
                std::thread::spawn(move || memory.reserve_spaces("1", 1).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        // five of ten single-space requests fit into the seeded five spaces
        assert_eq!(successes, 5);
        assert_eq!(memory.lesson("1").unwrap().spaces, 0);
    }
}
