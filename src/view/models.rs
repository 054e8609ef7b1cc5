//! View models consumed by the page templates.
//!
//! Everything here is display-ready: prices are already formatted and
//! selection state is precomputed, so the templates stay logic-free.

use askama::Template;

/// The whole storefront page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub cart_count: u32,
    pub tabs: Vec<TabLink>,
    pub brands: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    /// Product grid for the catalog and hot tabs.
    pub grid: Option<Vec<CardView>>,
    pub orders: Option<OrdersView>,
    pub request: Option<RequestView>,
    pub host_present: bool,
    /// Queued host commands, already escaped for a `<script>` element.
    pub host_commands: String,
    pub local_alerts: Vec<String>,
}

pub struct TabLink {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct CardView {
    pub id: String,
    pub brand: String,
    pub title: String,
    pub price: String,
    pub img: String,
    /// Only set on the hot tab.
    pub discount: Option<u8>,
}

pub struct LineView {
    pub id: String,
    pub brand: String,
    pub title: String,
    pub price: String,
    pub img: String,
    pub qty: u32,
}

pub struct MethodChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Orders tab. An empty `lines` list renders the empty state.
pub struct OrdersView {
    pub lines: Vec<LineView>,
    pub total: String,
    pub name: String,
    pub phone: String,
    pub comment: String,
    pub methods: Vec<MethodChoice>,
}

pub struct RequestView {
    pub brand: String,
    pub model: String,
    pub size: String,
    pub budget: String,
    pub notes: String,
    pub name: String,
    pub phone: String,
    pub methods: Vec<MethodChoice>,
}
