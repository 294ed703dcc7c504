//! Catalog-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog text is not a JSON array of descriptors.
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A descriptor has an empty `icon`.
    #[error("Tool at index {index} has no icon")]
    MissingIcon { index: usize },
}

impl CatalogError {
    /// Create a new "missing icon" error.
    pub fn missing_icon(index: usize) -> Self {
        Self::MissingIcon { index }
    }
}
