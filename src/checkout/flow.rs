//! Checkout and custom request form state.

use serde::Serialize;

use super::models::{ContactInfo, CustomRequest};
use super::payload::{CustomRequestPayload, OrderPayload};
use super::CheckoutError;
use crate::cart::Cart;

/// Where the checkout form is in its submit cycle.
///
/// `Rejected` stays editable and can be resubmitted; the next edit moves the
/// form back to `Editing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStage {
    #[default]
    Editing,
    Validating,
    Rejected,
    Submitted,
}

/// Contact fields that turn the cart into an order.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    contact: ContactInfo,
    stage: CheckoutStage,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Replaces the entered contact fields.
    pub fn update(&mut self, contact: ContactInfo) {
        self.contact = contact;
        self.stage = CheckoutStage::Editing;
    }

    /// Validates the form against `cart` and builds the order payload.
    ///
    /// On rejection nothing but the stage changes. A validated form stays in
    /// `Validating` until the caller has dispatched the payload and calls
    /// [`CheckoutForm::complete`] or [`CheckoutForm::reject`].
    pub fn submit(&mut self, operator: &str, cart: &Cart) -> Result<OrderPayload, CheckoutError> {
        self.stage = CheckoutStage::Validating;

        if !self.contact.has_required_fields() {
            self.reject();
            return Err(CheckoutError::MissingContact);
        }
        if cart.is_empty() {
            self.reject();
            return Err(CheckoutError::EmptyCart);
        }

        Ok(OrderPayload::new(operator, self.contact.clone(), cart))
    }

    /// The order went out: contact fields go back to their defaults.
    pub fn complete(&mut self) {
        self.contact = ContactInfo::default();
        self.stage = CheckoutStage::Submitted;
    }

    pub fn reject(&mut self) {
        self.stage = CheckoutStage::Rejected;
    }
}

/// The "find this item for me" form. No field is required.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    request: CustomRequest,
}

impl RequestForm {
    pub fn request(&self) -> &CustomRequest {
        &self.request
    }

    pub fn update(&mut self, request: CustomRequest) {
        self.request = request;
    }

    /// Builds the payload and resets the form.
    pub fn submit(&mut self, operator: &str) -> CustomRequestPayload {
        let request = std::mem::take(&mut self.request);
        CustomRequestPayload::new(operator, &request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::models::ContactMethod;

    fn filled() -> ContactInfo {
        ContactInfo {
            name: "Ivan".into(),
            phone: "+7900".into(),
            contact_method: ContactMethod::Call,
            comment: "вечером".into(),
        }
    }

    fn cart() -> Cart {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(catalog.find("p2").unwrap());
        cart
    }

    #[test]
    fn test_missing_name_rejected_without_mutation() {
        let mut form = CheckoutForm::new();
        let mut contact = filled();
        contact.name.clear();
        form.update(contact.clone());

        let err = form.submit("@op", &cart()).unwrap_err();
        assert!(matches!(err, CheckoutError::MissingContact));
        assert_eq!(form.stage(), CheckoutStage::Rejected);
        assert_eq!(form.contact(), &contact);

        form.update(filled());
        assert_eq!(form.stage(), CheckoutStage::Editing);
    }

    #[test]
    fn test_missing_phone_rejected() {
        let mut form = CheckoutForm::new();
        let mut contact = filled();
        contact.phone.clear();
        form.update(contact);
        assert!(matches!(
            form.submit("@op", &cart()),
            Err(CheckoutError::MissingContact)
        ));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut form = CheckoutForm::new();
        form.update(filled());
        assert!(matches!(
            form.submit("@op", &Cart::new()),
            Err(CheckoutError::EmptyCart)
        ));
        assert_eq!(form.contact(), &filled());
    }

    #[test]
    fn test_submit_then_complete_resets_contact() {
        let mut form = CheckoutForm::new();
        form.update(filled());
        let payload = form.submit("@op", &cart()).unwrap();

        assert_eq!(payload.contact, filled());
        assert_eq!(payload.total_rub, 390_000);
        assert_eq!(form.stage(), CheckoutStage::Validating);
        assert_eq!(form.contact(), &filled());

        form.complete();
        assert_eq!(form.stage(), CheckoutStage::Submitted);
        assert_eq!(form.contact(), &ContactInfo::default());
        assert_eq!(form.contact().contact_method, ContactMethod::Telegram);
    }

    #[test]
    fn test_request_form_accepts_empty_and_resets() {
        let mut form = RequestForm::default();
        let empty = form.submit("@op");
        assert_eq!(empty.kind, "custom_request");
        assert_eq!(empty.payload.brand, "");

        form.update(CustomRequest {
            brand: "Chanel".into(),
            ..CustomRequest::default()
        });
        let payload = form.submit("@op");
        assert_eq!(payload.payload.brand, "Chanel");
        assert_eq!(form.request(), &CustomRequest::default());
    }
}
