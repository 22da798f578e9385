//! Inventory readback endpoint

use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::Ingredient;

use crate::core::ServerState;
use crate::db::repository;

/// GET /api/inventory: current stock levels for the shop dashboard
pub async fn list_inventory(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<Ingredient>>> {
    let ingredients = repository::ingredient::find_all(&state.pool).await?;
    Ok(ApiResponse::success(ingredients))
}
