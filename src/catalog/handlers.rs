//! Read-only catalog API
//!
//! Serves the assortment as JSON for the same filters the page uses.

use super::{apply_filters, filter::with_all, FilterSelection};
use crate::session::SharedState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Creates routes for catalog queries
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/catalog", get(list_catalog))
}

/// Endpoint: GET /api/catalog?brand=&category=
/// Missing or `all` facets match everything; out-of-stock items are never
/// listed.
async fn list_catalog(
    State(state): State<SharedState>,
    Query(selection): Query<FilterSelection>,
) -> impl IntoResponse {
    let catalog = &state.catalog;
    Json(json!({
        "brands": with_all(catalog.brands()),
        "categories": with_all(catalog.categories()),
        "filters": selection,
        "catalog": apply_filters(catalog.items(), &selection),
        "hot": apply_filters(catalog.hot(), &selection),
    }))
}
