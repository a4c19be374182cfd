//! Order Record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::OrderCreate;

/// Order line item as stored; the lesson is referenced by its normalized
/// string id, not a record link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub lesson_id: String,
    pub quantity: u32,
}

/// Order record as stored in SurrealDB. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub items: Vec<OrderItemRecord>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Build the record for a validated order. `created_at` is stamped here,
    /// at persistence time.
    pub fn new(doc: OrderCreate) -> Self {
        Self {
            id: None,
            name: doc.name,
            phone: doc.phone,
            email: doc.email,
            items: doc.items.iter().map(OrderItemRecord::from).collect(),
            total: doc.total,
            created_at: Utc::now(),
        }
    }
}
