//! Route handlers.
//!
//! Every handler that needs items loads the catalog afresh on the blocking
//! pool. Nothing is shared between requests beyond the immutable [`Catalog`].

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use storesearch_core::search::{self, SearchResults};
use storesearch_core::{Catalog, Item};

use crate::error::ApiError;

/// Body of `GET /health`.
pub const HEALTH_MESSAGE: &str = "Store Search API is running";

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /search?q=`: substring search. A blank query answers with a prompt
/// without touching the catalog.
///
/// Only the first `q` counts when the parameter is repeated.
pub async fn search_items(
    State(catalog): State<Catalog>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResults>, ApiError> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    let query = search::Query::parse(raw);
    if query.is_empty() {
        tracing::debug!("search: empty query");
        return Ok(Json(SearchResults::empty_query()));
    }

    let items = load(catalog).await?;
    let out = search::search(&query, items);
    tracing::info!(query = %query, total = out.total, "search");
    Ok(Json(out))
}

/// `GET /items`: the whole catalog.
pub async fn list_items(State(catalog): State<Catalog>) -> Result<Json<ItemsResponse>, ApiError> {
    let items = load(catalog).await?;
    tracing::debug!(total = items.len(), "items listed");
    Ok(Json(ItemsResponse {
        total: items.len(),
        items,
    }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: HEALTH_MESSAGE,
    })
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not found" })),
    )
}

pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "method not allowed" })),
    )
}

async fn load(catalog: Catalog) -> Result<Vec<Item>, ApiError> {
    let items = tokio::task::spawn_blocking(move || catalog.load()).await??;
    Ok(items)
}
