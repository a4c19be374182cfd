//! Booking Service
//!
//! Order placement with all-or-nothing space reservation. Every item is
//! validated and policy-checked before any reservation is applied, and a
//! compensation list undoes partial reservations when a later step fails.

use thiserror::Error;

use super::policy;
use crate::db::repository::RepoError;
use crate::inventory::Inventory;
use crate::models::{Lesson, OrderCreate, OrderReceipt, PlaceOrderRequest};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_order_optional_text,
    validate_order_text,
};

/// 下单错误
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Lesson {0} not found")]
    LessonNotFound(String),

    #[error("Lesson {lesson_id} has {available} spaces left, requested {requested}")]
    InsufficientSpaces {
        lesson_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Store error: {0}")]
    Store(#[from] RepoError),
}

/// 下单服务
///
/// 流程: 校验请求 → 解析课程 → 策略预检 → 逐项预留 (失败则反向回滚) →
/// 持久化订单。预留依赖存储端的原子扣减，预检只为尽早拒绝。
pub struct BookingService {
    inventory: Inventory,
}

impl BookingService {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    /// 下单 - 预留名额并持久化订单
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<OrderReceipt, OrderError> {
        validate_request(&request)?;

        let resolved = self.resolve_lessons(&request).await?;

        // 预检: 任何一项不可订就整单拒绝，不做任何预留
        for (item, lesson) in request.items.iter().zip(&resolved) {
            if !policy::can_reserve(lesson, item.quantity) {
                return Err(OrderError::InsufficientSpaces {
                    lesson_id: item.lesson_id.clone(),
                    requested: item.quantity,
                    available: lesson.spaces,
                });
            }
        }

        // 逐项预留，记录补偿列表；中途失败按相反顺序回滚
        let mut reserved: Vec<(String, u32)> = Vec::with_capacity(request.items.len());
        for item in &request.items {
            match self
                .inventory
                .reserve_spaces(&item.lesson_id, item.quantity)
                .await
            {
                Ok(_) => reserved.push((item.lesson_id.clone(), item.quantity)),
                Err(err) => {
                    self.release_reserved(&reserved).await;
                    return Err(match err {
                        RepoError::NotFound(_) => {
                            OrderError::LessonNotFound(item.lesson_id.clone())
                        }
                        RepoError::InsufficientSpaces {
                            lesson_id,
                            requested,
                            available,
                        } => OrderError::InsufficientSpaces {
                            lesson_id,
                            requested,
                            available,
                        },
                        other => OrderError::Store(other),
                    });
                }
            }
        }

        let total = match request.total {
            Some(total) => total,
            None => request
                .items
                .iter()
                .zip(&resolved)
                .map(|(item, lesson)| lesson.price * f64::from(item.quantity))
                .sum(),
        };

        let doc = OrderCreate {
            name: request.name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: request.email.clone(),
            items: request.items.clone(),
            total,
        };

        let order = match self.inventory.create_order(doc).await {
            Ok(order) => order,
            Err(err) => {
                self.release_reserved(&reserved).await;
                return Err(OrderError::Store(err));
            }
        };

        tracing::info!(
            order_id = %order.id,
            total = order.total,
            items = order.items.len(),
            "Order placed"
        );

        Ok(OrderReceipt {
            order_id: order.id,
            total: order.total,
            mode: self.inventory.mode(),
        })
    }

    async fn resolve_lessons(&self, request: &PlaceOrderRequest) -> Result<Vec<Lesson>, OrderError> {
        let mut resolved = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let lesson = self
                .inventory
                .lesson(&item.lesson_id)
                .await
                .map_err(|err| match err {
                    RepoError::NotFound(_) => OrderError::LessonNotFound(item.lesson_id.clone()),
                    other => OrderError::Store(other),
                })?;
            resolved.push(lesson);
        }
        Ok(resolved)
    }

    /// Apply the compensation list in reverse order. A failed release is
    /// logged and skipped; without a multi-document transaction there is
    /// nothing more to do.
    async fn release_reserved(&self, reserved: &[(String, u32)]) {
        for (lesson_id, quantity) in reserved.iter().rev() {
            if let Err(err) = self.inventory.release_spaces(lesson_id, *quantity).await {
                tracing::error!(
                    lesson_id = %lesson_id,
                    quantity,
                    error = %err,
                    "Failed to release reserved spaces during rollback"
                );
            }
        }
    }
}

fn validate_request(request: &PlaceOrderRequest) -> Result<(), OrderError> {
    validate_order_text(&request.name, "name", MAX_NAME_LEN)?;
    validate_order_text(&request.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_order_optional_text(&request.email, "email", MAX_EMAIL_LEN)?;

    if request.items.is_empty() {
        return Err(OrderError::Validation("items must not be empty".to_string()));
    }
    for item in &request.items {
        if item.quantity == 0 {
            return Err(OrderError::Validation(format!(
                "quantity for lesson {} must be at least 1",
                item.lesson_id
            )));
        }
    }
    if let Some(total) = request.total
        && total < 0.0
    {
        return Err(OrderError::Validation("total must not be negative".to_string()));
    }
    Ok(())
}
