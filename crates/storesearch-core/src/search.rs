//! Search layer: case-insensitive substring matching over catalog items.
//!
//! A query matches an item when the normalised query text occurs anywhere in
//! the item's [searchable text](crate::Item::searchable_text). There is no
//! ranking: results keep the order of the input.

use crate::types::Item;
use serde::Serialize;

/// Message returned in place of results when the query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please provide a search query";

/// A normalised query: trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Self {
        Query(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An empty query matches nothing.
    pub fn matches(&self, item: &Item) -> bool {
        !self.is_empty() && item.searchable_text().contains(self.0.as_str())
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a search, shaped as the `/search` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// The normalised query.
    pub query: String,
    pub results: Vec<Item>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl SearchResults {
    /// The response for a blank query: no results plus a prompt.
    pub fn empty_query() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            total: 0,
            message: Some(EMPTY_QUERY_MESSAGE),
        }
    }
}

/// Run `query` against `items`, keeping matches in their original order.
pub fn search(query: &Query, items: impl IntoIterator<Item = Item>) -> SearchResults {
    if query.is_empty() {
        return SearchResults::empty_query();
    }

    let results: Vec<Item> = items.into_iter().filter(|item| query.matches(item)).collect();
    tracing::debug!(query = %query, total = results.len(), "search complete");

    SearchResults {
        query: query.as_str().to_string(),
        total: results.len(),
        results,
        message: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
