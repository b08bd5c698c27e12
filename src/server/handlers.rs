//! HTTP handlers for menu operations
//!
//! Handlers only extract parameters, run validation and the query pipeline,
//! and serialize results. All collection logic lives in the core modules;
//! storage errors are mapped to the typed error at this boundary.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::config::ServiceConfig;
use crate::core::error::MenuError;
use crate::core::item::{MenuItem, MenuItemUpdate};
use crate::core::query::{self, ListParams, ListQuery};
use crate::core::store::MenuStore;
use crate::core::validation::{validate_item, validate_limit};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>, config: Arc<ServiceConfig>) -> Self {
        Self { store, config }
    }
}

/// List menu items, optionally filtered, sorted and bounded
///
/// GET /menu?q=&sort_by={name,price}&order={asc,desc}&limit=
pub async fn list_menu(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MenuItem>>, MenuError> {
    let limit = validate_limit(params.limit.as_deref(), state.config.default_limit)?;
    let query = ListQuery::new(&params, limit);

    // Snapshot under the lock, pipeline after it is released
    let snapshot = state.store.list().await?;
    let items = query::run(snapshot, &query);

    Ok(Json(items))
}

/// Create a menu item
///
/// POST /menu
pub async fn create_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItem>, JsonRejection>,
) -> Result<Response, MenuError> {
    let Json(item) = payload?;
    validate_item(&item, &state.config.validation)?;

    let created = state.store.insert(item).await?;
    info!(order_code = %created.order_code, "menu item created");

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// Update the first menu item with the given order code
///
/// PUT /menu/{order_code}
///
/// Fields absent from the body retain their stored values; the merged item
/// is re-validated before being stored.
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(order_code): Path<String>,
    payload: Result<Json<MenuItemUpdate>, JsonRejection>,
) -> Result<Json<MenuItem>, MenuError> {
    let Json(update) = payload?;

    let existing = state
        .store
        .find_by_code(&order_code)
        .await?
        .ok_or_else(|| MenuError::NotFound {
            order_code: order_code.clone(),
        })?;

    validate_item(&update.apply_to(&existing), &state.config.validation)?;

    let updated = state
        .store
        .update(&order_code, update)
        .await?
        .ok_or_else(|| MenuError::NotFound {
            order_code: order_code.clone(),
        })?;

    info!(order_code = %order_code, "menu item updated");

    Ok(Json(updated))
}

/// Remove the first menu item with the given order code
///
/// DELETE /menu/{order_code}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(order_code): Path<String>,
) -> Result<Json<MenuItem>, MenuError> {
    let removed = state
        .store
        .remove(&order_code)
        .await?
        .ok_or_else(|| MenuError::NotFound {
            order_code: order_code.clone(),
        })?;

    info!(order_code = %order_code, "menu item removed");

    Ok(Json(removed))
}
