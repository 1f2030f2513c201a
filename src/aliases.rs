//! Section alias resolution.
//!
//! Maps free-text queries such as `"tendances"` or `"à la une"` to a section
//! id. Sections are tried in table order and the first one with a matching
//! alias wins, so order is part of the configuration.

use crate::scoring::normalize::normalize;
use crate::types::SectionId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping of section ids to their aliases.
///
/// Serializes as a JSON object; key order in the document is the resolution
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
  sections: IndexMap<SectionId, Vec<String>>,
}

impl Default for AliasTable {
  /// The bilingual (English / French) table used by the site.
  fn default() -> Self {
    Self::builder()
      .section("featured", ["featured", "à la une", "a la une"])
      .section("new", ["new", "nouveaux", "nouveau"])
      .section("trending", ["trending", "trending now", "tendance", "tendances"])
      .section("updated", ["updated", "mise a jour", "mise à jour", "maj"])
      .section("originals", ["originals", "originaux", "originales"])
      .build()
  }
}

impl AliasTable {
  /// Create a new, empty alias table builder.
  pub fn builder() -> AliasTableBuilder {
    AliasTableBuilder::default()
  }

  /// A table with no sections. Nothing ever resolves.
  pub fn empty() -> Self {
    Self {
      sections: IndexMap::new(),
    }
  }

  /// Resolve a raw query to a section id.
  ///
  /// The query is normalized first. A section matches when the normalized
  /// query contains the normalized form of any of its aliases. Empty aliases
  /// are ignored, otherwise they would match every query.
  pub fn resolve(&self, query: &str) -> Option<&str> {
    let q = normalize(query);
    self.resolve_normalized(&q)
  }

  /// Like [`resolve`](Self::resolve) for an already normalized query.
  pub fn resolve_normalized(&self, normalized_query: &str) -> Option<&str> {
    self
      .sections
      .iter()
      .find(|(_, aliases)| {
        aliases.iter().any(|alias| {
          let a = normalize(alias);
          !a.is_empty() && normalized_query.contains(&a)
        })
      })
      .map(|(id, _)| id.as_str())
  }

  /// Section ids in resolution order.
  pub fn section_ids(&self) -> impl Iterator<Item = &str> {
    self.sections.keys().map(String::as_str)
  }

  /// Aliases of one section.
  pub fn aliases(&self, section: &str) -> Option<&[String]> {
    self.sections.get(section).map(Vec::as_slice)
  }

  pub fn len(&self) -> usize {
    self.sections.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sections.is_empty()
  }
}

/// Builder for alias tables.
#[derive(Debug, Default)]
pub struct AliasTableBuilder {
  sections: IndexMap<SectionId, Vec<String>>,
}

impl AliasTableBuilder {
  /// Append a section with its aliases.
  ///
  /// Adding a section that already exists extends its aliases and keeps its
  /// original position.
  pub fn section<I, S>(mut self, id: impl Into<SectionId>, aliases: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .sections
      .entry(id.into())
      .or_default()
      .extend(aliases.into_iter().map(Into::into));
    self
  }

  /// Build the alias table.
  pub fn build(self) -> AliasTable {
    AliasTable {
      sections: self.sections,
    }
  }
}
