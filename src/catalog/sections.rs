//! Section browsing: the home page rows and the per-section grids.

use super::store::Catalog;
use crate::types::{GameId, GameRecord, SectionId};
use serde::Serialize;
use std::ops::Range;

/// Slice of the catalog shown as "featured" when no such section is defined.
const FEATURED_FALLBACK: Range<usize> = 0..24;
/// Slice of the catalog shown as "new" when no such section is defined.
const NEW_FALLBACK: Range<usize> = 24..48;
/// Home rows generated when the catalog has no `sections` block.
const HOME_FEATURED: Range<usize> = 0..6;
const HOME_NEW: Range<usize> = 6..12;

/// One carousel row on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow<'a> {
  /// Section id, also the target of the row's "view more" link.
  pub id: SectionId,
  /// Display title of the row.
  pub title: String,
  /// Games in row order.
  pub games: Vec<&'a GameRecord>,
}

impl Catalog {
  /// Games of one section, in section order.
  ///
  /// A section defined by the catalog lists its games explicitly; ids that do
  /// not exist in the catalog are skipped. Undefined sections fall back to a
  /// slice of the catalog: `featured` and `new` take fixed windows, anything
  /// else shows every game. Returns `None` when the result is empty.
  pub fn section_items(&self, id: &str) -> Option<Vec<&GameRecord>> {
    let items = match self.section(id) {
      Some(slugs) => self.resolve_slugs(slugs),
      None => match id {
        "featured" => self.window(FEATURED_FALLBACK),
        "new" => self.window(NEW_FALLBACK),
        _ => self.games().collect(),
      },
    };

    if items.is_empty() {
      None
    } else {
      Some(items)
    }
  }

  /// The rows of the home page.
  ///
  /// With explicit sections there is one row per section, in catalog order.
  /// Without them two rows are cut from the start of the catalog.
  pub fn home_rows(&self) -> Vec<SectionRow<'_>> {
    match self.sections_map() {
      Some(sections) => sections
        .iter()
        .map(|(id, slugs)| SectionRow {
          id: id.clone(),
          title: row_title(id),
          games: self.resolve_slugs(slugs),
        })
        .collect(),
      None => vec![
        SectionRow {
          id: "featured".to_string(),
          title: row_title("featured"),
          games: self.window(HOME_FEATURED),
        },
        SectionRow {
          id: "new".to_string(),
          title: row_title("new"),
          games: self.window(HOME_NEW),
        },
      ],
    }
  }

  /// Ids of every section a page can be generated for.
  pub fn browsable_sections(&self) -> Vec<&str> {
    if self.has_explicit_sections() {
      self.section_ids().collect()
    } else {
      vec!["featured", "new"]
    }
  }

  fn resolve_slugs(&self, slugs: &[GameId]) -> Vec<&GameRecord> {
    slugs
      .iter()
      .filter_map(|slug| {
        let game = self.get(slug);
        if game.is_none() {
          log::warn!("section references unknown game `{slug}`");
        }
        game
      })
      .collect()
  }

  fn window(&self, range: Range<usize>) -> Vec<&GameRecord> {
    self
      .games()
      .skip(range.start)
      .take(range.end - range.start)
      .collect()
  }
}

fn row_title(id: &str) -> String {
  match id {
    "featured" => "Featured".to_string(),
    "new" => "New".to_string(),
    other => other.to_string(),
  }
}

/// Turn an id such as `two-player_games` into `Two Player Games`.
///
/// Runs of `-` and `_` become a single space. Any alphanumeric character
/// that follows a non-alphanumeric one (or starts the id) is upper-cased, so
/// `foo.bar` gives `Foo.Bar`. Everything else is left untouched.
pub fn title_case(id: &str) -> String {
  let mut out = String::with_capacity(id.len());
  let mut in_separator = false;
  let mut in_word = false;
  for c in id.chars() {
    if c == '-' || c == '_' {
      if !in_separator {
        out.push(' ');
      }
      in_separator = true;
      in_word = false;
      continue;
    }
    in_separator = false;

    if c.is_alphanumeric() {
      if in_word {
        out.push(c);
      } else {
        out.extend(c.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(c);
      in_word = false;
    }
  }
  out
}
