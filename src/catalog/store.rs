//! In-memory catalog store.

use crate::error::{CatalogError, Result};
use crate::types::{string_list, GameId, GameRecord, SectionId};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// An immutable snapshot of the game catalog.
///
/// Games keep the order they were loaded in, which the browsing views rely on
/// for their fallback slices. A `Catalog` is never mutated once built; to pick
/// up new data, load a new one and swap the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  games: IndexMap<GameId, GameRecord>,
  sections: Option<IndexMap<SectionId, Vec<GameId>>>,
}

/// On-disk shape of `games.json`.
///
/// Entries are kept as raw values so a single malformed game or section is
/// skipped instead of failing the whole document.
#[derive(Deserialize)]
struct RawCatalog {
  #[serde(default)]
  games: IndexMap<GameId, Value>,
  #[serde(default)]
  sections: Option<IndexMap<SectionId, Value>>,
}

impl From<RawCatalog> for Catalog {
  fn from(raw: RawCatalog) -> Self {
    let games = raw
      .games
      .into_iter()
      .filter_map(|(id, value)| match serde_json::from_value::<GameRecord>(value) {
        Ok(mut game) => {
          game.id = id.clone();
          Some((id, game))
        }
        Err(e) => {
          log::warn!("skipping malformed game `{id}`: {e}");
          None
        }
      })
      .collect();

    let sections = raw.sections.map(|sections| {
      sections
        .into_iter()
        .map(|(id, value)| {
          if !value.is_array() {
            log::warn!("section `{id}` is not a list of ids");
          }
          let members = string_list(&value);
          (id, members)
        })
        .collect()
    });

    Self { games, sections }
  }
}

impl Catalog {
  /// Create a new `CatalogBuilder`.
  pub fn builder() -> CatalogBuilder {
    CatalogBuilder::default()
  }

  /// Parse a catalog from a JSON document.
  ///
  /// The document has a `games` object keyed by slug and an optional
  /// `sections` object mapping section ids to lists of slugs. The key of each
  /// game becomes its [`GameRecord::id`].
  pub fn from_json(json: &str) -> Result<Self> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    let catalog = Self::from(raw);
    log::debug!(
      "loaded catalog with {} games and {} sections",
      catalog.len(),
      catalog.section_ids().count()
    );
    Ok(catalog)
  }

  /// Parse a catalog from a reader.
  pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
    let raw: RawCatalog = serde_json::from_reader(reader)?;
    Ok(Self::from(raw))
  }

  /// Load a catalog from a JSON file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&text)
  }

  /// Look up a game by id.
  pub fn get(&self, id: &str) -> Option<&GameRecord> {
    self.games.get(id)
  }

  /// All games in catalog order.
  pub fn games(&self) -> impl ExactSizeIterator<Item = &GameRecord> {
    self.games.values()
  }

  pub fn len(&self) -> usize {
    self.games.len()
  }

  pub fn is_empty(&self) -> bool {
    self.games.is_empty()
  }

  /// Ids listed under a section, if the catalog defines it.
  pub fn section(&self, id: &str) -> Option<&[GameId]> {
    self.sections.as_ref()?.get(id).map(Vec::as_slice)
  }

  /// Section ids in catalog order.
  pub fn section_ids(&self) -> impl Iterator<Item = &str> {
    self
      .sections
      .iter()
      .flat_map(|s| s.keys())
      .map(String::as_str)
  }

  /// Whether the source data carried a `sections` block at all.
  pub fn has_explicit_sections(&self) -> bool {
    self.sections.is_some()
  }

  pub(crate) fn sections_map(&self) -> Option<&IndexMap<SectionId, Vec<GameId>>> {
    self.sections.as_ref()
  }
}

/// Builder for assembling a catalog in code.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
  games: IndexMap<GameId, GameRecord>,
  sections: Option<IndexMap<SectionId, Vec<GameId>>>,
  duplicate: Option<GameId>,
}

impl CatalogBuilder {
  /// Add a game. Ids must be unique.
  pub fn game(mut self, game: GameRecord) -> Self {
    if self.games.contains_key(&game.id) {
      self.duplicate.get_or_insert_with(|| game.id.clone());
    } else {
      self.games.insert(game.id.clone(), game);
    }
    self
  }

  /// Add a section listing the given ids in order.
  pub fn section<I, S>(mut self, id: impl Into<SectionId>, members: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<GameId>,
  {
    self
      .sections
      .get_or_insert_with(IndexMap::new)
      .insert(id.into(), members.into_iter().map(Into::into).collect());
    self
  }

  /// Build the catalog, rejecting duplicate ids.
  pub fn build(self) -> Result<Catalog> {
    if let Some(id) = self.duplicate {
      return Err(CatalogError::DuplicateId(id));
    }
    Ok(Catalog {
      games: self.games,
      sections: self.sections,
    })
  }
}
