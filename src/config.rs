//! Engine configuration.

use crate::aliases::AliasTable;
use crate::error::{CatalogError, Result};
use crate::rules::ScoreWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Search configuration, loadable from JSON.
///
/// Every field is optional in the document:
///
/// ```json
/// {
///   "aliases": { "trending": ["trending", "tendances"] },
///   "weights": { "section": 8 },
///   "limit": 50
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Section aliases, in resolution order.
  pub aliases: AliasTable,
  /// Points per scoring signal.
  pub weights: ScoreWeights,
  /// Maximum number of results.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<usize>,
}

impl SearchConfig {
  /// Parse a configuration from JSON.
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  /// Load a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&text)
  }
}
