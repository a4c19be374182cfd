//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::booking::BookingService;
use crate::core::ServerState;
use crate::models::{OrderReceipt, PlaceOrderRequest};
use crate::utils::AppResult;

/// POST /orders - 下单
///
/// 成功返回 201 和订单回执；名额不足 409，课程不存在 404，请求无效 400
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderReceipt>)> {
    let service = BookingService::new(state.inventory.clone());
    let receipt = service.place_order(payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
