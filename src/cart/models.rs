//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart line items
fn default_quantity() -> i64 {
    1
}

/// A product handed to `add_to_cart`.
///
/// Only `id` is interpreted; every other field is opaque payload that is
/// carried through to the resulting [`LineItem`] unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, compared by equality. A missing `id`
    /// deserializes to `Value::Null`, which still matches at most one entry.
    #[serde(default)]
    pub id: Value,

    /// Captures any extra fields (e.g., name, price) dynamically
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Product {
    /// Convenience constructor for building products in code rather than
    /// from JSON.
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            extra: HashMap::new(),
        }
    }

    /// Attaches an opaque payload field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Represents one distinct product currently in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique product identifier, compared by equality
    #[serde(default)]
    pub id: Value,

    /// Quantity of this item (defaults to 1). Signed: zero and negative
    /// values are accepted and stored as-is, removal is always explicit.
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Captures any extra fields (e.g., name, price) dynamically
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<Product> for LineItem {
    /// A freshly added product always enters the cart with quantity 1.
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            quantity: 1,
            extra: product.extra,
        }
    }
}
