//! Checkout Domain Module
//!
//! This module turns session state into payloads for the operator:
//! - Form models (ContactInfo, CustomRequest)
//! - Form state and the checkout submit cycle
//! - Wire payloads (order, custom request)
//! - HTTP handlers for both submissions

pub mod flow;
pub mod handlers;
pub mod models;
pub mod payload;

use thiserror::Error;

pub use flow::{CheckoutForm, CheckoutStage, RequestForm};
pub use handlers::routes;
pub use models::{ContactInfo, ContactMethod, CustomRequest};
pub use payload::{CustomRequestPayload, OrderPayload, DEFAULT_OPERATOR_HANDLE};

/// Why a submission did not go through. Display strings are shown to the
/// customer as-is.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Заполните имя и телефон, пожалуйста.")]
    MissingContact,

    #[error("Корзина пуста. Добавьте позиции из каталога.")]
    EmptyCart,

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
