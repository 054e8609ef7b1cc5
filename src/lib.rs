//! Personal Shopper Library
//!
//! Server-rendered storefront for a personal-shopper service running inside a
//! messenger mini-app host: catalog and hot deals with filters, a cart,
//! checkout and custom requests delivered to an operator through the host.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod host;
pub mod session;

// Presentation
pub mod view;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
