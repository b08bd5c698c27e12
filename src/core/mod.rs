//! Core collection logic: item type, validation, query pipeline, store seam

pub mod error;
pub mod item;
pub mod query;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, MenuError};
pub use item::{MenuItem, MenuItemUpdate};
pub use query::{ListParams, ListQuery, SortField, SortOrder};
pub use store::MenuStore;
