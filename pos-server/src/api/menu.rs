//! Menu catalog endpoint

use axum::extract::State;
use shared::error::{AppResult, ApiResponse};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::db::repository;

/// GET /api/menu: active catalog items for the cashier screen
pub async fn list_menu(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let items = repository::menu_item::find_all_active(&state.pool).await?;
    Ok(ApiResponse::success(items))
}
