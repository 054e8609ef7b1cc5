//! Per-visitor shop session.
//!
//! A `ShopSession` owns everything one visitor can change: the active tab,
//! the cart, the filter selection, both forms, and the host bridge picked
//! when the session was created.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::cart::{helpers::format_item_summary, Cart};
use crate::catalog::{FilterSelection, Product};
use crate::checkout::{
    CheckoutError, CheckoutForm, ContactInfo, CustomRequest, CustomRequestPayload, OrderPayload,
    RequestForm,
};
use crate::host::{ButtonAction, ButtonParams, HostBridge, HostCommand};

/// Confirmation shown after an order went out.
pub const ORDER_SENT_MESSAGE: &str = "Заявка отправлена менеджеру. Мы свяжемся с вами лично.";
/// Confirmation shown after a custom request went out.
pub const REQUEST_SENT_MESSAGE: &str = "Запрос отправлен. Менеджер свяжется с вами лично.";

/// Top-level views of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Catalog,
    Hot,
    Orders,
    Request,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Catalog, Tab::Hot, Tab::Orders, Tab::Request];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Catalog => "catalog",
            Tab::Hot => "hot",
            Tab::Orders => "orders",
            Tab::Request => "request",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Catalog => "Каталог",
            Tab::Hot => "Горячее",
            Tab::Orders => "Мои заказы",
            Tab::Request => "Подбор",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

#[derive(Debug)]
pub struct ShopSession {
    tab: Tab,
    cart: Cart,
    filters: FilterSelection,
    checkout: CheckoutForm,
    request: RequestForm,
    bridge: Box<dyn HostBridge>,
    /// Cart count last pushed to the host button.
    synced_count: Option<u32>,
    last_seen: Instant,
}

impl ShopSession {
    /// Starts a session; the bridge is told the app is ready and should take
    /// the full height, once.
    pub fn new(mut bridge: Box<dyn HostBridge>) -> Self {
        bridge.ready();
        bridge.expand();

        let mut session = Self {
            tab: Tab::default(),
            cart: Cart::new(),
            filters: FilterSelection::default(),
            checkout: CheckoutForm::new(),
            request: RequestForm::default(),
            bridge,
            synced_count: None,
            last_seen: Instant::now(),
        };
        session.sync_host_button();
        session
    }

    /// When the visitor last made a request on this session.
    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
    }

    pub fn checkout(&self) -> &CheckoutForm {
        &self.checkout
    }

    pub fn request(&self) -> &RequestForm {
        &self.request
    }

    pub fn is_host_present(&self) -> bool {
        self.bridge.is_present()
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
        self.sync_host_button();
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove(id);
        self.sync_host_button();
    }

    pub fn change_qty(&mut self, id: &str, delta: i64) {
        self.cart.change_qty(id, delta);
        self.sync_host_button();
    }

    // -------------------------------------------------------------------------
    // Submissions
    // -------------------------------------------------------------------------

    pub fn update_contact(&mut self, contact: ContactInfo) {
        self.checkout.update(contact);
    }

    /// Runs the checkout cycle.
    ///
    /// A rejection alerts the user and leaves the cart and form untouched. A
    /// successful submission hands the serialized order to the host, clears
    /// the cart, resets the contact form and switches to the orders tab.
    pub fn submit_order(&mut self, operator: &str) -> Result<OrderPayload, CheckoutError> {
        let payload = match self.checkout.submit(operator, &self.cart) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::info!(reason = %e, "Checkout rejected");
                self.bridge.alert(&e.to_string());
                return Err(e);
            }
        };

        let data = match serde_json::to_string(&payload) {
            Ok(data) => data,
            Err(e) => {
                self.checkout.reject();
                return Err(e.into());
            }
        };

        tracing::info!(
            items = %format_item_summary(&self.cart),
            total_rub = payload.total_rub,
            contact_method = payload.contact.contact_method.as_str(),
            "Order submitted"
        );

        self.bridge.send(&data);
        self.bridge.alert(ORDER_SENT_MESSAGE);
        self.cart.clear();
        self.checkout.complete();
        self.tab = Tab::Orders;
        self.sync_host_button();
        Ok(payload)
    }

    /// Sends a custom request. No field is validated.
    pub fn submit_request(
        &mut self,
        operator: &str,
        request: CustomRequest,
    ) -> Result<CustomRequestPayload, CheckoutError> {
        self.request.update(request);
        let payload = self.request.submit(operator);
        let data = serde_json::to_string(&payload)?;

        tracing::info!(brand = %payload.payload.brand, "Custom request submitted");

        self.bridge.send(&data);
        self.bridge.alert(REQUEST_SENT_MESSAGE);
        self.tab = Tab::Orders;
        Ok(payload)
    }

    // -------------------------------------------------------------------------
    // Host
    // -------------------------------------------------------------------------

    /// Handles a click on the host's persistent button. Returns whether a
    /// handler was registered.
    pub fn click_main_button(&mut self) -> bool {
        match self.bridge.click_button() {
            Some(ButtonAction::OpenOrders) => {
                self.tab = Tab::Orders;
                true
            }
            None => false,
        }
    }

    pub fn drain_host_commands(&mut self) -> Vec<HostCommand> {
        self.bridge.drain()
    }

    pub fn pending_host_commands(&self) -> &[HostCommand] {
        self.bridge.pending()
    }

    /// Pushes button appearance and handler to the host whenever the cart
    /// count differs from the last pushed value.
    fn sync_host_button(&mut self) {
        let count = self.cart.count();
        if self.synced_count == Some(count) {
            return;
        }
        self.bridge
            .configure_button(ButtonParams::for_cart_count(count));
        self.bridge.on_button_click(ButtonAction::OpenOrders);
        self.synced_count = Some(count);
    }
}
