//! Payloads handed to the host data channel.
//!
//! Field names and the `to` value are read by the operator and must stay
//! stable.

use serde::Serialize;

use super::models::{ContactInfo, ContactMethod, CustomRequest};
use crate::cart::{Cart, OrderItem};

/// Default destination for every payload.
pub const DEFAULT_OPERATOR_HANDLE: &str = "@grad_zakup";

/// A submitted cart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderPayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub to: String,
    pub contact: ContactInfo,
    pub items: Vec<OrderItem>,
    #[serde(rename = "totalRUB")]
    pub total_rub: u64,
}

impl OrderPayload {
    pub fn new(operator: &str, contact: ContactInfo, cart: &Cart) -> Self {
        Self {
            kind: "order",
            to: operator.to_string(),
            contact,
            items: cart.to_items(),
            total_rub: cart.total(),
        }
    }
}

/// Contact block of a custom request (no comment field).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestContact {
    pub name: String,
    pub phone: String,
    pub contact_method: ContactMethod,
}

impl From<&ContactInfo> for RequestContact {
    fn from(contact: &ContactInfo) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            contact_method: contact.contact_method,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestBody {
    pub brand: String,
    pub model: String,
    pub size: String,
    #[serde(rename = "budgetRUB")]
    pub budget_rub: String,
    pub notes: String,
    pub contact: RequestContact,
}

/// A submitted personal-shopping request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomRequestPayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub to: String,
    pub payload: RequestBody,
}

impl CustomRequestPayload {
    pub fn new(operator: &str, request: &CustomRequest) -> Self {
        Self {
            kind: "custom_request",
            to: operator.to_string(),
            payload: RequestBody {
                brand: request.brand.clone(),
                model: request.model.clone(),
                size: request.size.clone(),
                budget_rub: request.budget.clone(),
                notes: request.notes.clone(),
                contact: RequestContact::from(&request.contact),
            },
        }
    }
}
