//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog.
///
/// Only the container can fail. Individual records never produce an error:
/// missing or malformed fields degrade to defaults during normalization.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON.
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog document is valid JSON but not an array of records.
    #[error("Catalog must be a JSON array of products, found {0}")]
    NotAnArray(&'static str),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
