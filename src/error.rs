//! Error types for loading catalogs, configuration and description files.
//!
//! Searching never fails; only the I/O and parsing surfaces return these.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// The catalog or configuration JSON could not be parsed.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// A file could not be read.
  #[error("failed to read {}: {source}", path.display())]
  Io {
    /// The file that was being read.
    path: PathBuf,
    /// The underlying I/O error.
    #[source]
    source: std::io::Error,
  },

  /// A catalog entry was rejected while building the catalog.
  #[error("duplicate game id `{0}`")]
  DuplicateId(String),
}
