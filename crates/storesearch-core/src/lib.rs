//! storesearch-core: catalog loading and search for the Store Search service.
//!
//! # Architecture
//!
//! ```text
//! Catalog (CSV file | fallback) ──► Search ──► HTTP (storesearch-api)
//! ```
//!
//! Nothing here holds mutable state. A request loads the catalog, filters it,
//! and drops it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError};
pub use search::{search, Query, SearchResults};
pub use types::{Item, ItemId};
