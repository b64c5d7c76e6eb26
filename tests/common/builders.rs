//! Test builders: ergonomic constructors for `Item` fixtures.
//!
//! Designed for readability in test assertions, not for production use.

use storesearch_core::{Item, ItemId};

/// Fluent builder for [`Item`] test fixtures.
///
/// ```rust
/// let item = ItemBuilder::new(7, "Desk Lamp")
///     .description("LED desk lamp")
///     .category("Home")
///     .tags(&["light", "office"])
///     .build();
/// ```
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            item: Item {
                id: id.into(),
                name: name.into(),
                ..Item::default()
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.item.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = category.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.item.price = price;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.item.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// Ids of `items`, in order.
pub fn ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|i| i.id.clone()).collect()
}

/// A catalog of `n` items; every third one is a "lamp".
pub fn build_catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let (name, category) = if i % 3 == 0 {
                (format!("Lamp {i}"), "Home")
            } else {
                (format!("Widget {i}"), "Misc")
            };
            ItemBuilder::new(i as i64, name)
                .description(format!("catalog entry {i}"))
                .category(category)
                .tags(&["sample"])
                .build()
        })
        .collect()
}
