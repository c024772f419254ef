//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Product, LineItem)
//! - The reactive cart sequence and its mutation operations
//! - The per-id cart registry
//! - Business logic helpers (cart ids, formatting)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use helpers::{format_item_summary, get_or_create_cart_id};
pub use models::{LineItem, Product};
pub use state::{Cart, CartStore, SharedStore};
