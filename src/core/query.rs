//! Pure query pipeline over a menu snapshot: filter, sort, limit
//!
//! Everything here operates on a snapshot taken from the store; the stored
//! collection is never reordered or mutated by a read. The canonical
//! pipeline is filter → sort → limit, in that order, so the limit bounds the
//! requested subset rather than the raw collection.

use serde::Deserialize;

use crate::core::item::MenuItem;

/// Sort key for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
}

impl SortField {
    /// Parse the `sort_by` token; anything unrecognized means "do not sort"
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(SortField::Name),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `order` token; anything other than the exact `desc` token
    /// is ascending
    pub fn parse(token: &str) -> Self {
        match token {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Raw list-query parameters as they arrive on the wire
///
/// `limit` stays textual here so that validation owns the parse and can
/// distinguish "absent" from "present but not a number".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
}

/// A resolved, validated list query ready to run against a snapshot
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Free-text filter; empty means no filtering
    pub query: String,
    /// Sort key and direction; `None` leaves stored order untouched
    pub sort: Option<(SortField, SortOrder)>,
    /// Result-size bound, already validated non-negative
    pub limit: usize,
}

impl ListQuery {
    /// Resolve raw parameters into a query, given an already-validated limit
    pub fn new(params: &ListParams, limit: usize) -> Self {
        let sort = params
            .sort_by
            .as_deref()
            .and_then(SortField::parse)
            .map(|field| {
                let order = params
                    .order
                    .as_deref()
                    .map(SortOrder::parse)
                    .unwrap_or_default();
                (field, order)
            });
        Self {
            query: params.q.clone().unwrap_or_default(),
            sort,
            limit,
        }
    }
}

/// Filter a snapshot by a free-text query
///
/// An empty query is the identity. Otherwise items whose name or order code
/// contains the query case-insensitively are kept, in original order.
pub fn filter(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}

/// Sort items in place by the given field and direction
///
/// Name comparison is case-insensitive lexicographic, price comparison is
/// numeric. The sort is stable: items with equal keys keep their relative
/// order, so pagination stays deterministic after filtering.
pub fn sort_items(items: &mut [MenuItem], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Price => a.price.cmp(&b.price),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Bound the result to its first `n` elements
///
/// A bound at or above the current length is a no-op.
pub fn apply_limit(mut items: Vec<MenuItem>, n: usize) -> Vec<MenuItem> {
    items.truncate(n);
    items
}

/// Run the canonical pipeline (filter → sort → limit) over a snapshot
pub fn run(snapshot: Vec<MenuItem>, query: &ListQuery) -> Vec<MenuItem> {
    let mut items = filter(&snapshot, &query.query);
    if let Some((field, order)) = query.sort {
        sort_items(&mut items, field, order);
    }
    apply_limit(items, query.limit)
}
