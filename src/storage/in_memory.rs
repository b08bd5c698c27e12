//! In-memory implementation of MenuStore
//!
//! The collection lives behind a single `RwLock`: writes take the lock
//! exclusively, reads take it shared just long enough to copy a snapshot.
//! Query computation happens on the snapshot after the lock is released, so
//! a reader can never observe a partially-applied mutation and a returned
//! result can never change under the caller.

use crate::core::item::{MenuItem, MenuItemUpdate};
use crate::core::store::MenuStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory menu store
///
/// Cloning is cheap and shares the underlying collection.
#[derive(Clone)]
pub struct InMemoryMenuStore {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl InMemoryMenuStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with the given items
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

/// First index whose order code matches, in stored order
fn position_by_code(items: &[MenuItem], order_code: &str) -> Option<usize> {
    items.iter().position(|item| item.order_code == order_code)
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list(&self) -> Result<Vec<MenuItem>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.clone())
    }

    async fn insert(&self, item: MenuItem) -> Result<MenuItem> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        items.push(item.clone());

        Ok(item)
    }

    async fn find_by_code(&self, order_code: &str) -> Result<Option<MenuItem>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(position_by_code(&items, order_code).map(|i| items[i].clone()))
    }

    async fn update(&self, order_code: &str, update: MenuItemUpdate) -> Result<Option<MenuItem>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(index) = position_by_code(&items, order_code) else {
            return Ok(None);
        };

        let merged = update.apply_to(&items[index]);
        items[index] = merged.clone();

        Ok(Some(merged))
    }

    async fn remove(&self, order_code: &str) -> Result<Option<MenuItem>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(index) = position_by_code(&items, order_code) else {
            return Ok(None);
        };

        Ok(Some(items.remove(index)))
    }
}
