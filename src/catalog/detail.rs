//! The per-game detail view.

use super::store::Catalog;
use crate::types::GameRecord;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// How many other games the detail page suggests.
const MORE_GAMES: usize = 8;

const NO_DESCRIPTION: &str = "No description available yet.";

/// Everything the game page needs to render one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameDetail<'a> {
  /// The game itself.
  pub game: &'a GameRecord,
  /// Locator of the playable entry point handed to the player.
  pub player_src: String,
  /// Backdrop for the player splash.
  pub cover: &'a str,
  /// Other games, in catalog order.
  pub more_games: Vec<&'a GameRecord>,
}

impl<'a> GameDetail<'a> {
  /// Short text shown when no long description is available.
  pub fn summary(&self) -> &'a str {
    self
      .game
      .short_description
      .as_deref()
      .filter(|s| !s.is_empty())
      .unwrap_or(NO_DESCRIPTION)
  }
}

impl Catalog {
  /// Build the detail view for a game, or `None` if the id is unknown.
  pub fn detail(&self, id: &str) -> Option<GameDetail<'_>> {
    let game = self.get(id)?;

    let player_src = match game.play_path.as_deref() {
      Some(path) if !path.is_empty() => path.to_string(),
      _ => format!("/games/{id}/index.html"),
    };

    let cover = [&game.cover, &game.banner, &game.backdrop]
      .into_iter()
      .filter_map(|c| c.as_deref())
      .find(|c| !c.is_empty())
      .unwrap_or(game.image.as_str());

    let more_games = self
      .games()
      .filter(|g| g.id != id)
      .take(MORE_GAMES)
      .collect();

    Some(GameDetail {
      game,
      player_src,
      cover,
      more_games,
    })
  }
}

/// Resolve a game's `description` field to HTML.
///
/// A value starting with `<` is inline HTML. Anything else is a path relative
/// to `public_root` (a leading `/` is ignored). A file that cannot be read
/// yields `None` so the page falls back to the summary.
pub fn resolve_description(field: Option<&str>, public_root: &Path) -> Option<String> {
  let trimmed = field.map(str::trim).filter(|t| !t.is_empty())?;

  if trimmed.starts_with('<') {
    return Some(trimmed.to_string());
  }

  let rel = trimmed.strip_prefix('/').unwrap_or(trimmed);
  let full = public_root.join(rel);
  match std::fs::read_to_string(&full) {
    Ok(html) => Some(html),
    Err(e) if e.kind() == ErrorKind::NotFound => {
      log::debug!("description file {} not found", full.display());
      None
    }
    Err(e) => {
      log::warn!("cannot read description file {}: {e}", full.display());
      None
    }
  }
}
