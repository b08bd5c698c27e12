//! Input validation for menu items and query parameters
//!
//! Checks are fail-fast: the first failing rule is reported and later rules
//! are not evaluated. The rule set is driven by [`ValidationRules`] so the
//! same code serves both the loose deployment (only the required-field
//! checks) and the strict one (length and price bounds).

use crate::config::ValidationRules;
use crate::core::error::MenuError;
use crate::core::item::MenuItem;

/// Validate a candidate item against the configured rules
///
/// Rules are applied in a fixed order: empty name, empty order code, name
/// length, code length, non-positive price, price bound.
pub fn validate_item(item: &MenuItem, rules: &ValidationRules) -> Result<(), MenuError> {
    if item.name.is_empty() {
        return Err(MenuError::invalid_input("name is required"));
    }
    if item.order_code.is_empty() {
        return Err(MenuError::invalid_input("order code is required"));
    }
    if let Some(max) = rules.max_name_length {
        if item.name.chars().count() > max {
            return Err(MenuError::invalid_input(format!(
                "name must not exceed {max} characters"
            )));
        }
    }
    if let Some(max) = rules.max_code_length {
        if item.order_code.chars().count() > max {
            return Err(MenuError::invalid_input(format!(
                "order code must not exceed {max} characters"
            )));
        }
    }
    if rules.require_positive_price && item.price <= 0 {
        return Err(MenuError::invalid_input("price must be positive"));
    }
    if let Some(max) = rules.max_price {
        if item.price > max {
            return Err(MenuError::invalid_input(format!(
                "price must not exceed {max}"
            )));
        }
    }
    Ok(())
}

/// Resolve the raw `limit` query parameter into a result-size bound
///
/// An absent or empty parameter resolves to `default`. Anything else must
/// parse as a non-negative integer; the parsed value is returned unchanged,
/// with no implicit capping.
pub fn validate_limit(raw: Option<&str>, default: usize) -> Result<usize, MenuError> {
    let raw = match raw {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    raw.parse::<usize>().map_err(|_| MenuError::InvalidLimit {
        raw: raw.to_string(),
    })
}
