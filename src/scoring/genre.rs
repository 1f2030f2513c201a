//! Genre inference.

use crate::catalog::Catalog;
use crate::scoring::normalize::normalize;
use std::collections::BTreeSet;

/// Every distinct, non-empty normalized genre in the catalog.
pub fn catalog_genres(catalog: &Catalog) -> BTreeSet<String> {
  catalog
    .games()
    .filter_map(|g| g.genre.as_deref())
    .map(normalize)
    .filter(|g| !g.is_empty())
    .collect()
}

/// Genres the query refers to.
///
/// A catalog genre is inferred when the normalized query equals it or
/// contains it, so `"arcade games"` infers `"arcade"`. Several genres may
/// match; all of them are returned.
pub fn infer_genres(normalized_query: &str, catalog: &Catalog) -> BTreeSet<String> {
  catalog_genres(catalog)
    .into_iter()
    .filter(|g| normalized_query == g || normalized_query.contains(g.as_str()))
    .collect()
}
