//! HTTP handlers for cart operations
//!
//! Each endpoint edits the visitor's cart and redirects back to the page.

use crate::error::{AppError, Result};
use crate::session::SharedState;
use axum::{extract::State, http::HeaderMap, response::Response, routing::post, Form, Router};
use serde::Deserialize;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/qty", post(change_qty))
}

#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct QtyInput {
    pub product_id: String,
    pub delta: i64,
}

/// Endpoint: POST /cart/add
/// Adds one unit of a catalog or hot product.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(input): Form<ProductInput>,
) -> Result<Response> {
    let product = state
        .catalog
        .find(&input.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", input.product_id)))?;

    let key = state.session_key(&headers);
    let count = state.with_session(&key.id, key.hints, |session| {
        session.add_to_cart(product);
        session.cart().count()
    });
    tracing::debug!(session_id = %key.id, product_id = %product.id, count, "Added to cart");
    Ok(key.redirect_home())
}

/// Endpoint: POST /cart/remove
/// Unknown ids are ignored.
async fn remove_from_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(input): Form<ProductInput>,
) -> Response {
    let key = state.session_key(&headers);
    state.with_session(&key.id, key.hints, |session| {
        session.remove_from_cart(&input.product_id)
    });
    key.redirect_home()
}

/// Endpoint: POST /cart/qty
/// Quantity never drops below one; use remove for that.
async fn change_qty(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(input): Form<QtyInput>,
) -> Response {
    let key = state.session_key(&headers);
    state.with_session(&key.id, key.hints, |session| {
        session.change_qty(&input.product_id, input.delta)
    });
    key.redirect_home()
}
