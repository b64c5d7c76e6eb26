//! Catalog CSV fixtures used across harnesses.

use std::path::PathBuf;
use tempfile::TempDir;

/// A well-formed catalog with quoted multi-value tags and an extra column.
pub const CATALOG_CSV: &str = "\
id,name,description,price,category,tags,image
101,Espresso Machine,Pump espresso machine with steam wand,349.00,Kitchen,\"coffee, espresso, kitchen\",espresso.png
102,Yoga Mat,Non-slip mat for home workouts,25.5,Sports,\"yoga,fitness\",mat.png
103,Bluetooth Speaker,Portable speaker with deep bass,59.99,Electronics,\"audio, wireless\",speaker.png
";

/// Rows with an unparseable price, an empty price and no tags.
pub const CATALOG_CSV_MALFORMED: &str = "\
id,name,description,price,category,tags
201,Gift Card,Redeemable online,call us,Gifts,
202,Sticker,Free with every order,,Misc,
";

/// Write `contents` to `store_items.csv` inside a fresh temp dir. Keep the
/// returned `TempDir` alive for as long as the file is needed.
pub fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store_items.csv");
    std::fs::write(&path, contents).expect("write catalog fixture");
    (dir, path)
}
