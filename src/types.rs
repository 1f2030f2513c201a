//! Core data types for the playdex catalog and search results.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Type alias for game identifiers (the catalog slug).
pub type GameId = String;

/// Type alias for section identifiers such as `"trending"` or `"new"`.
pub type SectionId = String;

/// A single playable title from the catalog.
///
/// Every field other than `id` is optional in the source data. Missing, null
/// or mistyped fields deserialize to empty values so that one bad entry never
/// rejects the catalog and scoring never has to special-case them. Non-string
/// tags are dropped individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
  /// The unique catalog key. Filled from the map key when loading JSON.
  #[serde(default, deserialize_with = "lenient")]
  pub id: GameId,
  /// Human display name.
  #[serde(default, deserialize_with = "lenient")]
  pub title: String,
  /// Thumbnail asset reference.
  #[serde(default, deserialize_with = "lenient")]
  pub image: String,
  /// Free-text category label.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub genre: Option<String>,
  /// Additional free-text labels.
  #[serde(default, deserialize_with = "lenient_tags", skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
  /// Explicit location of the playable entry point.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub play_path: Option<String>,
  /// Preferred backdrop for the player splash.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub cover: Option<String>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub banner: Option<String>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub backdrop: Option<String>,
  /// Inline HTML, or a path to an HTML file under the public root.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub short_description: Option<String>,
}

/// Deserializes a field, falling back to its default when the value has the
/// wrong shape (including `null`).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  let value = Value::deserialize(deserializer)?;
  Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(string_list(&Value::deserialize(deserializer)?))
}

/// The string elements of a JSON array. Anything else yields an empty list.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
  match value {
    Value::Array(arr) => arr
      .iter()
      .filter_map(|v| v.as_str().map(|s| s.to_string()))
      .collect(),
    _ => Vec::new(),
  }
}

impl GameRecord {
  /// Creates a record with the given id and title and no other fields.
  pub fn new(id: impl Into<GameId>, title: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      ..Default::default()
    }
  }

  /// Sets the genre.
  pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
    self.genre = Some(genre.into());
    self
  }

  /// Appends a tag.
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.push(tag.into());
    self
  }

  /// Sets the thumbnail image.
  pub fn with_image(mut self, image: impl Into<String>) -> Self {
    self.image = image.into();
    self
  }

  /// The genre, or `""` when absent.
  pub fn genre_str(&self) -> &str {
    self.genre.as_deref().unwrap_or("")
  }
}

/// One rule of the relevance table.
///
/// Each signal is evaluated independently and contributes its weight when it
/// fires. See [`ScoreWeights`](crate::rules::ScoreWeights) for the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
  /// The normalized title starts with the normalized query.
  TitlePrefix,
  /// The normalized title contains the normalized query.
  TitleContains,
  /// The normalized id contains the normalized query.
  IdContains,
  /// The normalized genre contains the normalized query.
  GenreContains,
  /// The normalized genre is one of the genres inferred from the query.
  GenreHint,
  /// At least one normalized tag contains the normalized query.
  Tag,
  /// The game belongs to the section the query resolved to.
  Section,
}

impl Signal {
  /// All signals, in table order.
  pub const ALL: [Signal; 7] = [
    Signal::TitlePrefix,
    Signal::TitleContains,
    Signal::IdContains,
    Signal::GenreContains,
    Signal::GenreHint,
    Signal::Tag,
    Signal::Section,
  ];
}

/// A game annotated with its transient relevance score.
///
/// This only exists while ranking. The plain search API hands back the bare
/// records; [`SearchResults::explain`](crate::engine::SearchResults::explain)
/// exposes it for debugging a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredGame<'a> {
  /// The matched game.
  pub game: &'a GameRecord,
  /// Sum of the weights of every signal that fired.
  pub score: u32,
  /// The signals that fired, in table order.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub signals: Vec<Signal>,
}

impl<'a> ScoredGame<'a> {
  /// Creates an unscored entry for a game.
  pub fn new(game: &'a GameRecord) -> Self {
    Self {
      game,
      score: 0,
      signals: Vec::new(),
    }
  }

  /// Records a fired signal worth `points`.
  ///
  /// The score saturates at `u32::MAX` instead of overflowing.
  pub fn add(&mut self, signal: Signal, points: u32) {
    self.score = self.score.saturating_add(points);
    self.signals.push(signal);
  }

  /// Whether the game matched at all.
  pub fn is_match(&self) -> bool {
    self.score > 0
  }
}
