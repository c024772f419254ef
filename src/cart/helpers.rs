//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers and formatting.

use super::models::LineItem;
use serde_json::Value;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart lookup works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Prefers the `name` payload field and falls back to the item id.
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}x {}", item.quantity, display_name(item)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_name(item: &LineItem) -> String {
    match item.extra.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => item.id.to_string(),
    }
}
