//! The search engine that ranks the catalog against a query.

use crate::aliases::AliasTable;
use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::rules::ScoreWeights;
use crate::scoring::relevance::Scorer;
use crate::types::{GameRecord, ScoredGame};
use serde::Serialize;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The search engine.
///
/// `SearchEngine` owns the configuration (alias table, weights, result limit)
/// and nothing else. The catalog is passed in by reference on every call, so
/// one engine can serve any number of catalog snapshots concurrently.
///
/// # Examples
///
/// ```rust
/// use playdex::prelude::*;
///
/// let catalog = Catalog::builder()
///     .game(GameRecord::new("snake", "Snake Game").with_genre("Arcade"))
///     .game(GameRecord::new("puzzle1", "Block Puzzle").with_genre("Puzzle"))
///     .build()
///     .unwrap();
///
/// let engine = SearchEngine::builder().build();
///
/// match engine.search(&catalog, "snake") {
///     SearchOutcome::Results(results) => assert_eq!(results.games()[0].id, "snake"),
///     SearchOutcome::Prompt => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
  /// Alias table used to resolve section hints.
  aliases: AliasTable,
  /// The per-game scorer.
  scorer: Scorer,
  /// Maximum number of results to return. `None` returns every match.
  limit: Option<usize>,
}

/// The outcome of a search.
///
/// A blank query is not an error and not an empty result: the caller should
/// prompt for input instead of showing "no games found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
  /// The query was blank.
  Prompt,
  /// Ranked matches, possibly none.
  Results(SearchResults<'a>),
}

impl<'a> SearchOutcome<'a> {
  /// Whether the caller should prompt for a query.
  pub fn is_prompt(&self) -> bool {
    matches!(self, SearchOutcome::Prompt)
  }

  /// The results, if the query was not blank.
  pub fn results(&self) -> Option<&SearchResults<'a>> {
    match self {
      SearchOutcome::Prompt => None,
      SearchOutcome::Results(results) => Some(results),
    }
  }
}

/// Ranked matches for a non-blank query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<'a> {
  /// The trimmed query.
  pub query: String,
  /// The section the query resolved to, if any.
  pub section: Option<String>,
  /// Catalog genres the query refers to, sorted.
  pub inferred_genres: Vec<String>,
  #[serde(rename = "games", serialize_with = "serialize_games")]
  matches: Vec<ScoredGame<'a>>,
}

impl<'a> SearchResults<'a> {
  /// The matched games in rank order.
  pub fn games(&self) -> Vec<&'a GameRecord> {
    self.matches.iter().map(|m| m.game).collect()
  }

  /// Iterate over the matched games in rank order.
  pub fn iter(&self) -> impl Iterator<Item = &'a GameRecord> + '_ {
    self.matches.iter().map(|m| m.game)
  }

  /// Number of matches.
  pub fn len(&self) -> usize {
    self.matches.len()
  }

  pub fn is_empty(&self) -> bool {
    self.matches.is_empty()
  }

  /// The matches with their scores and fired signals, for debugging a ranking.
  pub fn explain(&self) -> &[ScoredGame<'a>] {
    &self.matches
  }
}

fn serialize_games<S>(matches: &[ScoredGame<'_>], serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.collect_seq(matches.iter().map(|m| m.game))
}

/// Orders matches by score (highest first), then title, then id.
///
/// Titles compare byte-wise and case-sensitively. The id is only consulted
/// when both score and title are equal, which makes the order total.
pub fn rank_order(a: &ScoredGame<'_>, b: &ScoredGame<'_>) -> Ordering {
  b.score
    .cmp(&a.score)
    .then_with(|| a.game.title.cmp(&b.game.title))
    .then_with(|| a.game.id.cmp(&b.game.id))
}

impl SearchEngine {
  /// Creates a new `SearchEngineBuilder`.
  pub fn builder() -> SearchEngineBuilder {
    SearchEngineBuilder::new()
  }

  /// Creates an engine from a loaded configuration.
  pub fn from_config(config: SearchConfig) -> Self {
    Self {
      aliases: config.aliases,
      scorer: Scorer::new(config.weights),
      limit: config.limit,
    }
  }

  /// The alias table in use.
  pub fn aliases(&self) -> &AliasTable {
    &self.aliases
  }

  /// The score weights in use.
  pub fn weights(&self) -> &ScoreWeights {
    self.scorer.weights()
  }

  /// Searches the catalog.
  ///
  /// ## Pipeline
  ///
  /// 1. Trim and normalize the query. A blank query returns
  ///    [`SearchOutcome::Prompt`].
  /// 2. Resolve a section from the alias table; its members get a boost.
  /// 3. Infer the catalog genres the query mentions.
  /// 4. Score every game. With the `parallel` feature this runs on rayon.
  /// 5. Drop games scoring zero and sort with [`rank_order`].
  /// 6. Apply the configured limit.
  pub fn search<'a>(&self, catalog: &'a Catalog, query: &str) -> SearchOutcome<'a> {
    let context = SearchContext::new(catalog, query, &self.aliases);
    if context.is_blank() {
      return SearchOutcome::Prompt;
    }

    log::debug!(
      "search {:?}: section={:?} genres={:?}",
      context.normalized_query,
      context.section,
      context.inferred_genres
    );

    let mut matches = self.score_all(&context);
    matches.sort_by(rank_order);

    if let Some(limit) = self.limit {
      matches.truncate(limit);
    }

    log::debug!("search {:?}: {} matches", context.normalized_query, matches.len());

    SearchOutcome::Results(SearchResults {
      query: context.query,
      section: context.section,
      inferred_genres: context.inferred_genres.into_iter().collect(),
      matches,
    })
  }

  #[cfg(feature = "parallel")]
  fn score_all<'a>(&self, context: &SearchContext<'a>) -> Vec<ScoredGame<'a>> {
    let games: Vec<&'a GameRecord> = context.catalog.games().collect();
    games
      .into_par_iter()
      .map(|game| self.scorer.score(context, game))
      .filter(ScoredGame::is_match)
      .collect()
  }

  #[cfg(not(feature = "parallel"))]
  fn score_all<'a>(&self, context: &SearchContext<'a>) -> Vec<ScoredGame<'a>> {
    context
      .catalog
      .games()
      .map(|game| self.scorer.score(context, game))
      .filter(ScoredGame::is_match)
      .collect()
  }
}

/// Searches `catalog` with the default configuration.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> SearchOutcome<'a> {
  SearchEngine::default().search(catalog, query)
}

/// A builder for creating `SearchEngine` instances.
#[derive(Debug, Default)]
pub struct SearchEngineBuilder {
  aliases: Option<AliasTable>,
  weights: Option<ScoreWeights>,
  limit: Option<usize>,
}

impl SearchEngineBuilder {
  /// Creates a new builder with every setting at its default.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the alias table. Defaults to the bilingual site table.
  pub fn aliases(mut self, aliases: AliasTable) -> Self {
    self.aliases = Some(aliases);
    self
  }

  /// Sets the score weights.
  pub fn weights(mut self, weights: ScoreWeights) -> Self {
    self.weights = Some(weights);
    self
  }

  /// Caps the number of results.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Builds the `SearchEngine`.
  pub fn build(self) -> SearchEngine {
    SearchEngine {
      aliases: self.aliases.unwrap_or_default(),
      scorer: Scorer::new(self.weights.unwrap_or_default()),
      limit: self.limit,
    }
  }
}
