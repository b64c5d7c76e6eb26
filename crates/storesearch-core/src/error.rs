//! Error types for storesearch-core.

use std::path::PathBuf;

/// Failure while reading a catalog file that exists on disk.
///
/// A missing file is not an error: the loader falls back to the built-in
/// items instead. Malformed prices and tags never surface here either.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read catalog {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Failure while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Load(#[from] config::ConfigError),
}
