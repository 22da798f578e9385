//! Health check endpoint

use axum::extract::State;
use serde_json::json;
use shared::error::{AppError, AppResult, ApiResponse};

use crate::core::ServerState;

/// GET /health: liveness plus a database round trip
pub async fn health_check(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .map_err(|e| AppError::database(format!("Health check query failed: {e}")))?;
    Ok(ApiResponse::success(json!({ "status": "ok" })))
}
