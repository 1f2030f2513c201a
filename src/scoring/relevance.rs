//! The additive relevance scorer.

use crate::context::SearchContext;
use crate::rules::ScoreWeights;
use crate::scoring::normalize::{normalize, normalize_opt};
use crate::types::{GameRecord, ScoredGame, Signal};
use std::collections::{BTreeSet, HashSet};

/// Scores games against a query.
///
/// Every rule of the table is checked independently and the points of every
/// rule that fires are summed; there is no early exit. A game scoring zero is
/// not a match.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
  weights: ScoreWeights,
}

impl Scorer {
  /// Creates a scorer with the given weights.
  pub fn new(weights: ScoreWeights) -> Self {
    Self { weights }
  }

  /// The weights in use.
  pub fn weights(&self) -> &ScoreWeights {
    &self.weights
  }

  /// Score one game using the signals prepared in `context`.
  pub fn score<'a>(&self, context: &SearchContext<'_>, game: &'a GameRecord) -> ScoredGame<'a> {
    self.score_game(
      game,
      &context.normalized_query,
      &context.section_members,
      &context.inferred_genres,
    )
  }

  /// Score one game from explicit inputs.
  ///
  /// `normalized_query` must already be normalized. Missing genre and tags
  /// count as empty and simply never fire.
  pub fn score_game<'a>(
    &self,
    game: &'a GameRecord,
    normalized_query: &str,
    section_members: &HashSet<&str>,
    inferred_genres: &BTreeSet<String>,
  ) -> ScoredGame<'a> {
    let q = normalized_query;
    let title = normalize(&game.title);
    let id = normalize(&game.id);
    let genre = normalize_opt(game.genre.as_deref());

    let mut scored = ScoredGame::new(game);
    let mut fire = |signal: Signal, hit: bool| {
      if hit {
        scored.add(signal, self.weights.points(signal));
      }
    };

    fire(Signal::TitlePrefix, title.starts_with(q));
    fire(Signal::TitleContains, title.contains(q));
    fire(Signal::IdContains, id.contains(q));
    fire(Signal::GenreContains, genre.contains(q));
    fire(Signal::GenreHint, inferred_genres.contains(&genre));
    fire(
      Signal::Tag,
      game.tags.iter().any(|tag| normalize(tag).contains(q)),
    );
    fire(Signal::Section, section_members.contains(game.id.as_str()));

    scored
  }
}
