//! Per-query state shared by every scoring pass.

use crate::aliases::AliasTable;
use crate::catalog::Catalog;
use crate::scoring::genre::infer_genres;
use crate::scoring::normalize::normalize;
use crate::types::SectionId;
use std::collections::{BTreeSet, HashSet};

/// Everything derived from the query before any game is scored.
///
/// The context is built once per search and then only read, so it can be
/// shared across threads while the catalog is scored.
#[derive(Debug, Clone)]
pub struct SearchContext<'a> {
  /// The catalog being searched.
  pub catalog: &'a Catalog,
  /// The trimmed query as typed.
  pub query: String,
  /// The normalized query used for every comparison.
  pub normalized_query: String,
  /// The section the query resolved to through the alias table.
  pub section: Option<SectionId>,
  /// Ids listed under the resolved section. Empty when nothing resolved.
  pub section_members: HashSet<&'a str>,
  /// Catalog genres the query refers to.
  pub inferred_genres: BTreeSet<String>,
}

impl<'a> SearchContext<'a> {
  /// Prepares the context for `query` against `catalog`.
  pub fn new(catalog: &'a Catalog, query: &str, aliases: &AliasTable) -> Self {
    let query = query.trim().to_string();
    let normalized_query = normalize(&query);
    let section = aliases
      .resolve_normalized(&normalized_query)
      .map(str::to_string);

    let section_members: HashSet<&str> = section
      .as_deref()
      .and_then(|id| catalog.section(id))
      .map(|ids| ids.iter().map(String::as_str).collect())
      .unwrap_or_default();

    let inferred_genres = infer_genres(&normalized_query, catalog);

    Self {
      catalog,
      query,
      normalized_query,
      section,
      section_members,
      inferred_genres,
    }
  }

  /// Whether the trimmed query is empty.
  ///
  /// Only whitespace counts as blank. A query that normalizes to nothing,
  /// such as a lone combining mark, is still searched.
  pub fn is_blank(&self) -> bool {
    self.query.is_empty()
  }
}
