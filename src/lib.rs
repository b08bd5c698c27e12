//! # menu-rs
//!
//! An in-memory menu catalog service. It holds a small collection of named,
//! priced items and exposes query (filter, sort, limit), create, update and
//! delete operations over HTTP.
//!
//! ## Architecture
//!
//! - [`core`] — the decision logic: the item type, validation, the pure
//!   filter → sort → limit query pipeline, and the store trait.
//! - [`storage`] — the in-memory store implementation behind a single lock.
//! - [`server`] — thin axum transport: parameter extraction and routing.
//! - [`config`] — explicit service configuration with documented defaults.
//!
//! Reads take a snapshot of the collection under the lock and compute the
//! query result after releasing it; the stored order is never mutated by a
//! read. Order codes identify items for update and delete, resolving to the
//! first match in stored order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use menu_rs::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(ServiceConfig::default());
//! let store: Arc<dyn MenuStore> = Arc::new(InMemoryMenuStore::with_items(config.seed.clone()));
//! let app = build_router(AppState::new(store, config));
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{ServiceConfig, ValidationRules};
    pub use crate::core::{
        ErrorResponse, ListParams, ListQuery, MenuError, MenuItem, MenuItemUpdate, MenuStore,
        SortField, SortOrder,
    };
    pub use crate::server::{build_router, AppState};
    pub use crate::storage::InMemoryMenuStore;

    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
