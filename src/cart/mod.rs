//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (OrderItem, Cart)
//! - Formatting helpers for logs
//! - HTTP handlers for cart edits

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, OrderItem};
