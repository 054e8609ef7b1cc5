//! HTTP handlers for checkout and custom requests
//!
//! Rejected submissions still redirect: the reason is queued as an alert
//! and shown on the next page render.

use super::{CheckoutError, ContactInfo, ContactMethod, CustomRequest};
use crate::error::Result;
use crate::session::SharedState;
use axum::{extract::State, http::HeaderMap, response::Response, routing::post, Form, Router};
use serde::Deserialize;

/// Creates routes for checkout operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/checkout/contact", post(save_contact))
        .route("/checkout", post(checkout))
        .route("/request", post(custom_request))
}

/// Contact fields as posted by the orders tab form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    pub comment: String,
}

impl From<ContactForm> for ContactInfo {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            contact_method: form.contact_method,
            comment: form.comment,
        }
    }
}

/// Fields of the request tab form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RequestInput {
    pub brand: String,
    pub model: String,
    pub size: String,
    pub budget: String,
    pub notes: String,
    pub name: String,
    pub phone: String,
    pub contact_method: ContactMethod,
}

impl From<RequestInput> for CustomRequest {
    fn from(input: RequestInput) -> Self {
        Self {
            brand: input.brand,
            model: input.model,
            size: input.size,
            budget: input.budget,
            notes: input.notes,
            contact: ContactInfo {
                name: input.name,
                phone: input.phone,
                contact_method: input.contact_method,
                comment: String::new(),
            },
        }
    }
}

/// Endpoint: POST /checkout/contact
/// Saves the contact form without submitting.
async fn save_contact(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let key = state.session_key(&headers);
    state.with_session(&key.id, key.hints, |session| {
        session.update_contact(form.into())
    });
    key.redirect_home()
}

/// Endpoint: POST /checkout
/// Submits the cart with the posted contact details.
async fn checkout(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let key = state.session_key(&headers);
    let outcome = state.with_session(&key.id, key.hints, |session| {
        session.update_contact(form.into());
        session.submit_order(state.operator())
    });

    match outcome {
        Ok(payload) => {
            tracing::debug!(session_id = %key.id, lines = payload.items.len(), "Checkout complete")
        }
        Err(CheckoutError::MissingContact | CheckoutError::EmptyCart) => {}
        Err(e) => return Err(e.into()),
    }
    Ok(key.redirect_home())
}

/// Endpoint: POST /request
/// Sends a custom request. Every field is optional.
async fn custom_request(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(input): Form<RequestInput>,
) -> Result<Response> {
    let key = state.session_key(&headers);
    state.with_session(&key.id, key.hints, |session| {
        session.submit_request(state.operator(), input.into())
    })?;
    Ok(key.redirect_home())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_into_contact() {
        let form = ContactForm {
            name: "Anna".into(),
            phone: "+7900".into(),
            ..ContactForm::default()
        };
        let contact = ContactInfo::from(form);
        assert_eq!(contact.name, "Anna");
        assert_eq!(contact.contact_method, ContactMethod::Telegram);
        assert!(contact.has_required_fields());
    }

    #[test]
    fn test_request_input_drops_comment() {
        let input = RequestInput {
            brand: "Chanel".into(),
            budget: "500000".into(),
            contact_method: ContactMethod::Whatsapp,
            ..RequestInput::default()
        };
        let request = CustomRequest::from(input);
        assert_eq!(request.brand, "Chanel");
        assert_eq!(request.budget, "500000");
        assert_eq!(request.contact.contact_method, ContactMethod::Whatsapp);
        assert!(request.contact.comment.is_empty());
        assert!(request.model.is_empty());
    }
}
