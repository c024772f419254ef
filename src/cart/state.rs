//! Shopping Cart State Management
//!
//! This module manages cart state: the reactive [`Cart`] sequence with its
//! three mutation operations, and the [`CartStore`] registry that keeps one
//! cart per cart id.

use super::models::{LineItem, Product};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

// =============================================================================
// Cart
// =============================================================================

/// An order-preserving, unique-by-id collection of line items.
///
/// The sequence lives inside a `tokio::sync::watch` channel so consumers can
/// subscribe to changes; `Cart` itself is a cheap cloneable handle and every
/// clone addresses the same underlying sequence. Insertion order is preserved
/// and is the only defined order.
#[derive(Debug, Clone)]
pub struct Cart {
    items: watch::Sender<Vec<LineItem>>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self { items }
    }

    /// Adds a product to the cart.
    ///
    /// # Behaviour
    ///
    /// * If a line item with the same `id` already exists, its `quantity` is
    ///   increased by 1 and the incoming product's other fields are
    ///   discarded.
    /// * Otherwise a new line item with `quantity = 1` is appended to the end
    ///   of the sequence, carrying all of the product's fields.
    ///
    /// Subscribers are notified in either case.
    pub fn add_to_cart(&self, product: Product) {
        self.items.send_modify(|items| {
            if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
                // Aggregate onto the existing entry; keep its fields.
                existing.quantity += 1;
                debug!(id = %existing.id, quantity = existing.quantity, "incremented line item");
            } else {
                debug!(id = %product.id, "appended line item");
                items.push(LineItem::from(product));
            }
        });
    }

    /// Removes the line item with matching `id`, preserving the relative
    /// order of the remaining items.
    ///
    /// A missing `id` is a silent no-op and does not wake subscribers.
    pub fn remove_from_cart(&self, id: impl Into<Value>) {
        let id = id.into();
        self.items.send_if_modified(|items| {
            match items.iter().position(|item| item.id == id) {
                Some(index) => {
                    items.remove(index);
                    debug!(%id, "removed line item");
                    true
                }
                None => false,
            }
        });
    }

    /// Sets (overwrites, never adds) the quantity of the line item with
    /// matching `id`.
    ///
    /// No validation is performed: zero and negative values are stored
    /// as-is. Removal at zero quantity is the caller's call, via
    /// [`Cart::remove_from_cart`]. A missing `id` is a silent no-op.
    pub fn update_quantity(&self, id: impl Into<Value>, quantity: i64) {
        let id = id.into();
        self.items.send_if_modified(|items| {
            match items.iter_mut().find(|item| item.id == id) {
                Some(item) => {
                    item.quantity = quantity;
                    debug!(%id, quantity, "updated quantity");
                    true
                }
                None => false,
            }
        });
    }

    /// Returns a snapshot of the current sequence, in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.borrow().clone()
    }

    /// Returns a snapshot of the line item with matching `id`, if present.
    pub fn get(&self, id: impl Into<Value>) -> Option<LineItem> {
        let id = id.into();
        self.items
            .borrow()
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Number of distinct line items currently in the cart.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Subscribes to the cart's sequence.
    ///
    /// The returned receiver resolves on every effective mutation; the
    /// snapshot it borrows reflects all operations applied so far.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.items.subscribe()
    }
}

// =============================================================================
// Cart Registry
// =============================================================================

/// Shared registry handle that can be safely passed between threads
pub type SharedStore = Arc<CartStore>;

/// Registry holding one [`Cart`] per cart id.
///
/// DashMap allows concurrent access without external Mutexes.
pub struct CartStore {
    carts: DashMap<String, Cart>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }

    /// Returns a handle to the cart for `cart_id`, creating an empty cart on
    /// first use.
    pub fn cart(&self, cart_id: &str) -> Cart {
        self.carts
            .entry(cart_id.to_string())
            .or_default()
            .clone()
    }

    /// Detaches and returns the cart for `cart_id`, if one exists.
    pub fn take(&self, cart_id: &str) -> Option<Cart> {
        self.carts.remove(cart_id).map(|(_, cart)| cart)
    }

    /// Number of carts currently registered.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// Whether the registry holds no carts.
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
