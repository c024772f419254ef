//! Shopping Cart State Library
//!
//! This library provides in-memory, order-preserving shopping cart state:
//! a cart is a unique-by-id sequence of line items with three mutation
//! operations (add, remove, update quantity), exposed behind a reactive
//! wrapper so consumers can subscribe to changes.

// Domain modules
pub mod cart;

pub use cart::{Cart, CartStore, LineItem, Product, SharedStore};
