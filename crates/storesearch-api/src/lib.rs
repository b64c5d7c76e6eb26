//! storesearch-api: HTTP surface of the Store Search service.
//!
//! Routes, all relative to the configured prefix (default `/api`):
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /search?q=` | `{query, results, total}` (plus `message` for a blank query) |
//! | `GET /items` | `{items, total}` |
//! | `GET /health` | `{status, message}` |
//!
//! Every response is JSON and carries `Access-Control-Allow-Origin: *`,
//! including `404` for unknown paths and `405` for non-GET methods.

pub mod cors;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::routing::get;
use axum::{middleware, Router};
use storesearch_core::Catalog;

/// Build the application router serving `catalog` under `prefix`.
pub fn router(catalog: Catalog, prefix: &str) -> Router {
    let routes = Router::new()
        .route("/search", get(handlers::search_items))
        .route("/items", get(handlers::list_items))
        .route("/health", get(handlers::health))
        .method_not_allowed_fallback(handlers::method_not_allowed);

    let app = match normalize_prefix(prefix) {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    };

    app.fallback(handlers::not_found)
        .layer(middleware::from_fn(cors::cors))
        .with_state(catalog)
}

/// `"api/"` → `Some("/api")`; `""` and `"/"` → `None` (mount at root).
fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');
    (!trimmed.is_empty()).then(|| format!("/{trimmed}"))
}
