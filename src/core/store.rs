//! Storage seam for the menu collection

use anyhow::Result;
use async_trait::async_trait;

use crate::core::item::{MenuItem, MenuItemUpdate};

/// Service trait for the shared menu collection
///
/// Implementations own the collection and its synchronization. Callers only
/// ever see snapshots; the backing sequence is never exposed. Mutations that
/// target an order code affect the first match in stored order, and return
/// `Ok(None)` when no item carries that code.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Snapshot of the current items, in insertion order
    async fn list(&self) -> Result<Vec<MenuItem>>;

    /// Append an already-validated item, preserving insertion order
    async fn insert(&self, item: MenuItem) -> Result<MenuItem>;

    /// First item with the given order code, if any
    async fn find_by_code(&self, order_code: &str) -> Result<Option<MenuItem>>;

    /// Merge an update into the first item with the given order code
    async fn update(&self, order_code: &str, update: MenuItemUpdate) -> Result<Option<MenuItem>>;

    /// Remove the first item with the given order code, keeping the order
    /// of the remainder
    async fn remove(&self, order_code: &str) -> Result<Option<MenuItem>>;
}
