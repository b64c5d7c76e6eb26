//! Core types for storesearch-core.
//!
//! This module defines the catalog record shared by the loader, the search
//! matcher and the HTTP layer: the [`Item`] and its [`ItemId`].

use serde::Serialize;
use std::collections::BTreeMap;

/// Identifier of a catalog item.
///
/// Built-in fallback items carry integer ids; ids read from a catalog file are
/// kept as the text that appeared in the file. Serialized without a tag, so
/// clients see a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Text(String::new())
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

/// A single catalog record.
///
/// Items are immutable once loaded. Every field other than `price` and `tags`
/// defaults to an empty value when the source omits it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// `0.0` when the source value is missing or not a number.
    pub price: f64,
    pub category: String,
    /// Order is preserved from the source. Empty when the source has no tags.
    pub tags: Vec<String>,
    /// Columns of a catalog file beyond the known ones, passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Item {
    /// The lowercased text a query is matched against: name, description,
    /// category and tags joined by single spaces.
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.description.len() + self.category.len() + 32,
        );
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.description);
        text.push(' ');
        text.push_str(&self.category);
        text.push(' ');
        text.push_str(&self.tags.join(" "));
        text.to_lowercase()
    }
}
