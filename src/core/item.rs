//! The menu item record and its update payload

use serde::{Deserialize, Serialize};

/// A single entry in the menu catalog
///
/// Canonical JSON field names are `name`, `order_code` and `price`. The
/// localized field names used by one deployment (`nama`, `kode_pesanan`,
/// `harga`) are accepted on input via serde aliases; output always uses the
/// canonical names.
///
/// `order_code` is the lookup key for update and delete. Uniqueness is not
/// enforced on insert; lookups resolve to the first match in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label, required non-empty
    #[serde(alias = "nama")]
    pub name: String,

    /// Lookup key, required non-empty
    #[serde(alias = "kode_pesanan")]
    pub order_code: String,

    /// Whole currency units
    #[serde(alias = "harga")]
    pub price: i64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, order_code: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            order_code: order_code.into(),
            price,
        }
    }

    /// Case-insensitive substring match against name or order code
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.order_code.to_lowercase().contains(&query)
    }
}

/// Partial update payload for an existing item
///
/// A field absent from the request body retains the stored value. "Absent"
/// is represented explicitly with `Option` rather than empty-string or zero
/// sentinels, so a supplied empty name or zero price is seen by validation
/// instead of being silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(alias = "nama")]
    pub name: Option<String>,

    #[serde(alias = "kode_pesanan")]
    pub order_code: Option<String>,

    #[serde(alias = "harga")]
    pub price: Option<i64>,
}

impl MenuItemUpdate {
    /// Merge this update into an existing item, producing the candidate
    /// the store would hold after the update
    pub fn apply_to(&self, existing: &MenuItem) -> MenuItem {
        MenuItem {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            order_code: self
                .order_code
                .clone()
                .unwrap_or_else(|| existing.order_code.clone()),
            price: self.price.unwrap_or(existing.price),
        }
    }
}
