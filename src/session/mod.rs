//! Shop Session Module
//!
//! This module contains per-visitor state and its plumbing:
//! - The shop session (tab, cart, filters, forms, host bridge)
//! - Application state holding all live sessions
//! - Session cookie helpers
//! - Page, navigation and host handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use helpers::SessionKey;
pub use models::{ShopSession, Tab};
pub use state::{spawn_session_sweeper, AppState, SharedState};
