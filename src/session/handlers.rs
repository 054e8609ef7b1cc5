//! Page, navigation and host handlers
//!
//! GET `/` renders the storefront for the visitor's session. The POST
//! endpoints mutate the session and redirect back to `/`.

use super::{helpers::SessionKey, models::Tab, state::SharedState};
use crate::catalog::FilterSelection;
use crate::error::{AppError, Result};
use crate::view::build_page;
use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Creates routes for page rendering and session navigation
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(page))
        .route("/tab", post(set_tab))
        .route("/filters", post(set_filters))
        .route("/host/button", post(host_button))
        .route("/api/session", get(session_snapshot))
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
    /// `telegram` when the host shell opens the page
    pub host: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TabForm {
    pub tab: Tab,
}

/// Endpoint: GET /
/// Renders the active tab, switching first when `?tab=` is given.
async fn page(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let key = state.session_key(&headers)
        .with_host_query(query.host.as_deref() == Some("telegram"));
    let tab = query
        .tab
        .as_deref()
        .map(str::parse::<Tab>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let page = state
        .with_session(&key.id, key.hints, |session| {
            if let Some(tab) = tab {
                session.set_tab(tab);
            }
            build_page(session, &state.catalog)
        })
        .map_err(|e| AppError::Internal(format!("failed to encode host commands: {e}")))?;

    let html = page.render()?;
    Ok(key.attach(Html(html).into_response()))
}

/// Endpoint: POST /tab
async fn set_tab(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<TabForm>,
) -> Response {
    let key = state.session_key(&headers);
    state.with_session(&key.id, key.hints, |session| session.set_tab(form.tab));
    key.redirect_home()
}

/// Endpoint: POST /filters
async fn set_filters(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(selection): Form<FilterSelection>,
) -> Response {
    let key = state.session_key(&headers);
    tracing::debug!(
        brand = selection.brand.as_str(),
        category = selection.category.as_str(),
        "Filters changed"
    );
    state.with_session(&key.id, key.hints, |session| session.set_filters(selection));
    key.redirect_home()
}

/// Endpoint: POST /host/button
/// Click on the host's persistent button, forwarded by the page script.
async fn host_button(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let key = state.session_key(&headers);
    let handled = state.with_session(&key.id, key.hints, |session| session.click_main_button());
    if !handled {
        tracing::debug!(session_id = %key.id, "Button click without a registered handler");
    }
    key.redirect_home()
}

/// Endpoint: GET /api/session
/// JSON view of the session. Pending host commands are reported, not drained.
/// Never creates a session: unknown visitors see a fresh one.
async fn session_snapshot(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    let key = SessionKey::from_headers(&headers);
    let body = state.inspect_session(&key.id, key.hints, |session| {
        let cart = session.cart();
        json!({
            "tab": session.tab(),
            "filters": session.filters(),
            "items": cart.to_items(),
            "count": cart.count(),
            "totalRUB": cart.total(),
            "host": session.is_host_present(),
            "checkout": {
                "stage": session.checkout().stage(),
                "contact": session.checkout().contact(),
            },
            "pendingCommands": session.pending_host_commands(),
        })
    });
    Json(body)
}
