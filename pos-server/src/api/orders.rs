//! Order endpoints

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{AppResult, ApiResponse};
use shared::models::{OrderDetail, SubmitOrderRequest, SubmitOrderResponse};

use crate::core::ServerState;
use crate::db::repository;
use crate::orders::submit_order;

/// POST /api/orders: submit a cart as a new order
pub async fn submit(
    State(state): State<ServerState>,
    Json(req): Json<SubmitOrderRequest>,
) -> AppResult<ApiResponse<SubmitOrderResponse>> {
    let resp = submit_order(&state.pool, &req).await?;
    Ok(ApiResponse::success(resp))
}

/// GET /api/orders/{id}: order readback with items and payments
pub async fn get_order(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let detail = repository::order::get_detail(&state.pool, id).await?;
    Ok(ApiResponse::success(detail))
}
