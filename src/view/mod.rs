//! View Layer
//!
//! Composes catalog, filter output, cart and form state into the page
//! template for the active tab.

pub mod helpers;
pub mod models;

use crate::catalog::{apply_filters, filter::with_all, Catalog, Facet, Product};
use crate::checkout::{ContactInfo, ContactMethod};
use crate::host::HostCommand;
use crate::session::{ShopSession, Tab};

pub use helpers::{format_rub, script_json};
pub use models::*;

const ALL_BRANDS_LABEL: &str = "Все бренды";
const ALL_CATEGORIES_LABEL: &str = "Все категории";

/// Builds the page for the session's active tab and drains its host command
/// queue: host commands go to the page script, local alerts are rendered
/// inline.
pub fn build_page(session: &mut ShopSession, catalog: &Catalog) -> serde_json::Result<PageTemplate> {
    let (local_alerts, host_commands): (Vec<_>, Vec<_>) = session
        .drain_host_commands()
        .into_iter()
        .partition(|cmd| matches!(cmd, HostCommand::LocalAlert { .. }));
    let local_alerts = local_alerts
        .into_iter()
        .filter_map(|cmd| match cmd {
            HostCommand::LocalAlert { message } => Some(message),
            _ => None,
        })
        .collect();

    let tab = session.tab();
    let filters = session.filters();

    let grid = match tab {
        Tab::Catalog => Some(cards(&apply_filters(catalog.items(), filters), false)),
        Tab::Hot => Some(cards(&apply_filters(catalog.hot(), filters), true)),
        Tab::Orders | Tab::Request => None,
    };

    Ok(PageTemplate {
        cart_count: session.cart().count(),
        tabs: Tab::ALL
            .into_iter()
            .map(|t| TabLink {
                key: t.as_str(),
                label: t.label(),
                active: t == tab,
            })
            .collect(),
        brands: options(catalog.brands(), &filters.brand, ALL_BRANDS_LABEL),
        categories: options(catalog.categories(), &filters.category, ALL_CATEGORIES_LABEL),
        grid,
        orders: (tab == Tab::Orders).then(|| orders_view(session)),
        request: (tab == Tab::Request).then(|| request_view(session)),
        host_present: session.is_host_present(),
        host_commands: script_json(&host_commands)?,
        local_alerts,
    })
}

fn options(values: &[String], selected: &Facet, all_label: &str) -> Vec<SelectOption> {
    with_all(values)
        .into_iter()
        .map(|value| SelectOption {
            label: if value == crate::catalog::filter::ALL {
                all_label.to_string()
            } else {
                value.clone()
            },
            selected: selected.as_str() == value,
            value,
        })
        .collect()
}

fn cards(products: &[&Product], hot: bool) -> Vec<CardView> {
    products
        .iter()
        .map(|p| CardView {
            id: p.id.clone(),
            brand: p.brand.clone(),
            title: p.title.clone(),
            price: format_rub(p.price_rub),
            img: p.img.clone(),
            discount: if hot { p.discount_pct.filter(|pct| *pct > 0) } else { None },
        })
        .collect()
}

fn methods(current: ContactMethod) -> Vec<MethodChoice> {
    ContactMethod::ALL
        .into_iter()
        .map(|m| MethodChoice {
            value: m.as_str(),
            label: m.label(),
            checked: m == current,
        })
        .collect()
}

fn orders_view(session: &ShopSession) -> OrdersView {
    let cart = session.cart();
    let ContactInfo {
        name,
        phone,
        contact_method,
        comment,
    } = session.checkout().contact().clone();

    OrdersView {
        lines: cart
            .items()
            .map(|line| LineView {
                id: line.product.id.clone(),
                brand: line.product.brand.clone(),
                title: line.product.title.clone(),
                price: format_rub(line.product.price_rub),
                img: line.product.img.clone(),
                qty: line.qty,
            })
            .collect(),
        total: format_rub(cart.total()),
        name,
        phone,
        comment,
        methods: methods(contact_method),
    }
}

fn request_view(session: &ShopSession) -> RequestView {
    let request = session.request().request().clone();
    RequestView {
        brand: request.brand,
        model: request.model,
        size: request.size,
        budget: request.budget,
        notes: request.notes,
        name: request.contact.name,
        phone: request.contact.phone,
        methods: methods(request.contact.contact_method),
    }
}
