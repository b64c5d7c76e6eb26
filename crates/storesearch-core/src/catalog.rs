//! Catalog: loads store [`Item`]s from a CSV file, or from the built-in
//! fallback set when no file is available.
//!
//! Nothing is cached. Every [`Catalog::load`] call reads the file again, so
//! edits to the catalog are visible on the next request.

use crate::error::CatalogError;
use crate::types::{Item, ItemId};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Fallback data
// ---------------------------------------------------------------------------

struct SampleItem {
    id: i64,
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    tags: &'static [&'static str],
}

const FALLBACK_ITEMS: &[SampleItem] = &[
    SampleItem {
        id: 1,
        name: "Wireless Headphones",
        description: "High-quality wireless headphones with noise cancellation",
        price: 199.99,
        category: "Electronics",
        tags: &["audio", "wireless", "headphones", "music"],
    },
    SampleItem {
        id: 2,
        name: "Running Shoes",
        description: "Comfortable running shoes for daily exercise",
        price: 89.99,
        category: "Sports",
        tags: &["shoes", "running", "sports", "fitness"],
    },
    SampleItem {
        id: 3,
        name: "Coffee Maker",
        description: "Automatic coffee maker with programmable timer",
        price: 129.99,
        category: "Kitchen",
        tags: &["coffee", "kitchen", "appliance", "morning"],
    },
];

/// The built-in sample items served when no catalog file exists.
pub fn fallback_items() -> Vec<Item> {
    FALLBACK_ITEMS
        .iter()
        .map(|s| Item {
            id: ItemId::Int(s.id),
            name: s.name.to_string(),
            description: s.description.to_string(),
            price: s.price,
            category: s.category.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            extra: BTreeMap::new(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Where items come from. Cheap to clone; holds only the configured path.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    path: Option<PathBuf>,
}

impl Catalog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// A catalog that always serves the fallback set.
    pub fn fallback() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load all items in source order.
    ///
    /// Returns the fallback set when no path is configured or the file does
    /// not exist. A file that exists but cannot be read is an error.
    pub fn load(&self) -> Result<Vec<Item>, CatalogError> {
        let path = match self.path.as_deref() {
            Some(p) if p.exists() => p,
            Some(p) => {
                tracing::debug!(path = %p.display(), "catalog file missing, using fallback items");
                return Ok(fallback_items());
            }
            None => {
                tracing::debug!("no catalog file configured, using fallback items");
                return Ok(fallback_items());
            }
        };

        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items = read_items(file).map_err(|source| CatalogError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), items = items.len(), "catalog loaded");
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV with a header row into items.
///
/// Columns are matched by header name, so their order does not matter. Short
/// rows are tolerated; absent cells count as empty.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut items = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut item = Item::default();
        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                "id" => item.id = ItemId::Text(value.to_string()),
                "name" => item.name = value.to_string(),
                "description" => item.description = value.to_string(),
                "price" => item.price = parse_price(value),
                "category" => item.category = value.to_string(),
                "tags" => item.tags = parse_tags(value),
                other => {
                    item.extra.insert(other.to_string(), value.to_string());
                }
            }
        }
        items.push(item);
    }
    Ok(items)
}

/// Parse a price cell. Anything that is not a finite number becomes `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_finite() => p,
        _ => 0.0,
    }
}

/// Split a comma-separated tags cell into trimmed tags.
///
/// A blank cell yields no tags. Otherwise every piece is kept, empty ones
/// included, so `"a,,b"` gives `["a", "", "b"]`.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CSV: &str = "\
id,name,description,price,category,tags
10,Desk Lamp,LED desk lamp,39.50,Home,\"light, desk ,office\"
11,Mystery Box,Who knows,not-a-price,Misc,
";

    #[test]
    fn fallback_has_three_items_in_order() {
        let items = fallback_items();
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![ItemId::Int(1), ItemId::Int(2), ItemId::Int(3)]);
        assert_eq!(items[2].name, "Coffee Maker");
        assert_eq!(items[0].tags, vec!["audio", "wireless", "headphones", "music"]);
    }

    #[test]
    fn read_items_parses_rows() {
        let items = read_items(CSV.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        let lamp = &items[0];
        assert_eq!(lamp.id, ItemId::from("10"));
        assert_eq!(lamp.price, 39.5);
        assert_eq!(lamp.tags, vec!["light", "desk", "office"]);
        assert!(lamp.extra.is_empty());
    }

    #[test]
    fn unparseable_price_is_zero_and_empty_tags_are_empty() {
        let items = read_items(CSV.as_bytes()).unwrap();
        let mystery = &items[1];
        assert_eq!(mystery.price, 0.0);
        assert!(mystery.tags.is_empty());
    }

    #[test]
    fn missing_columns_default_and_unknown_columns_are_kept() {
        let csv = "name,image\nKettle,kettle.png\n";
        let items = read_items(csv.as_bytes()).unwrap();
        assert_eq!(items[0].name, "Kettle");
        assert_eq!(items[0].id, ItemId::default());
        assert_eq!(items[0].price, 0.0);
        assert!(items[0].tags.is_empty());
        assert_eq!(items[0].extra.get("image").map(String::as_str), Some("kettle.png"));
    }

    #[rstest]
    #[case("12.5", 12.5)]
    #[case(" 3 ", 3.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("inf", 0.0)]
    #[case("NaN", 0.0)]
    fn price_parsing(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_price(raw), expected);
    }

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("a", &["a"])]
    #[case(" a , b,c ", &["a", "b", "c"])]
    #[case("a,,b", &["a", "", "b"])]
    #[case("a, b,", &["a", "b", ""])]
    fn tag_parsing(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_tags(raw), expected);
    }

    #[test]
    fn unconfigured_catalog_serves_fallback() {
        assert_eq!(Catalog::fallback().load().unwrap(), fallback_items());
    }

    #[test]
    fn missing_file_serves_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(Some(dir.path().join("nope.csv")));
        assert_eq!(catalog.load().unwrap(), fallback_items());
    }

    #[test]
    fn existing_file_is_read_each_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.csv");
        std::fs::write(&path, CSV).unwrap();
        let catalog = Catalog::new(Some(path.clone()));
        assert_eq!(catalog.load().unwrap().len(), 2);

        std::fs::write(&path, "id,name\n1,Only\n").unwrap();
        let items = catalog.load().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Only");
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(Some(dir.path().to_path_buf()));
        assert!(catalog.load().is_err());
    }
}
