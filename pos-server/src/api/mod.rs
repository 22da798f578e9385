//! HTTP API routes

pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Create the API router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/menu", get(menu::list_menu))
        .route("/api/inventory", get(inventory::list_inventory))
        .route("/api/orders", post(orders::submit))
        .route("/api/orders/{id}", get(orders::get_order))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
