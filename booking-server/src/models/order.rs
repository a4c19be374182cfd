//! Order Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryMode;

/// 订单行 - 一门课程和占用的名额数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 课程 id，接受标准化形式或裸 key
    pub lesson_id: String,
    /// 预留名额数量，必须 >= 1
    pub quantity: u32,
}

/// POST /orders 请求体
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// 客户端自带的总价；缺省时按课程单价计算
    #[serde(default)]
    pub total: Option<f64>,
}

/// Validated order content handed to the store. The id and `created_at`
/// timestamp are assigned at persistence time, not here.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// 订单 - 创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// 下单成功的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    pub total: f64,
    /// 标记降级 (demo) 模式，客户端据此提示持久性受限
    pub mode: InventoryMode,
}
