//! Route wiring for the menu service
//!
//! Produces an Axum router from application state. Transport concerns stop
//! here; everything behind the handlers is core logic.

use axum::{
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{
    create_menu_item, delete_menu_item, list_menu, update_menu_item, AppState,
};

/// Build the full router: health routes, menu routes, middleware
pub fn build_router(state: AppState) -> Router {
    health_routes()
        .merge(menu_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn menu_routes(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(list_menu).post(create_menu_item))
        .route(
            "/menu/{order_code}",
            put(update_menu_item).delete(delete_menu_item),
        )
        .with_state(state)
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "menu-rs"
    }))
}
