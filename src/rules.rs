//! Relevance weights for the additive scoring table.

use crate::types::Signal;
use serde::{Deserialize, Serialize};

/// Points awarded by each [`Signal`].
///
/// The defaults are the tuning constants the catalog has always been ranked
/// with. Every field has a serde default so a partial JSON object only
/// overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Title starts with the query.
    pub title_prefix: u32,
    /// Title contains the query.
    pub title_contains: u32,
    /// Id contains the query.
    pub id_contains: u32,
    /// Genre contains the query.
    pub genre_contains: u32,
    /// Genre equals an inferred genre.
    pub genre_hint: u32,
    /// Any tag contains the query.
    pub tag: u32,
    /// Member of the resolved section.
    pub section: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_prefix: 6,
            title_contains: 4,
            id_contains: 3,
            genre_contains: 3,
            genre_hint: 4,
            tag: 2,
            section: 5,
        }
    }
}

impl ScoreWeights {
    /// Create a new weights builder starting from the defaults.
    pub fn builder() -> ScoreWeightsBuilder {
        ScoreWeightsBuilder::default()
    }

    /// Points for a signal.
    pub fn points(&self, signal: Signal) -> u32 {
        match signal {
            Signal::TitlePrefix => self.title_prefix,
            Signal::TitleContains => self.title_contains,
            Signal::IdContains => self.id_contains,
            Signal::GenreContains => self.genre_contains,
            Signal::GenreHint => self.genre_hint,
            Signal::Tag => self.tag,
            Signal::Section => self.section,
        }
    }

    fn set(&mut self, signal: Signal, points: u32) {
        let slot = match signal {
            Signal::TitlePrefix => &mut self.title_prefix,
            Signal::TitleContains => &mut self.title_contains,
            Signal::IdContains => &mut self.id_contains,
            Signal::GenreContains => &mut self.genre_contains,
            Signal::GenreHint => &mut self.genre_hint,
            Signal::Tag => &mut self.tag,
            Signal::Section => &mut self.section,
        };
        *slot = points;
    }
}

/// Builder for score weights.
#[derive(Debug, Default)]
pub struct ScoreWeightsBuilder {
    weights: ScoreWeights,
}

impl ScoreWeightsBuilder {
    /// Override the points for one signal.
    pub fn weight(mut self, signal: Signal, points: u32) -> Self {
        self.weights.set(signal, points);
        self
    }

    /// Build the weights.
    pub fn build(self) -> ScoreWeights {
        self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let w = ScoreWeights::default();
        let points: Vec<u32> = Signal::ALL.iter().map(|s| w.points(*s)).collect();
        assert_eq!(points, vec![6, 4, 3, 3, 4, 2, 5]);
    }

    #[test]
    fn test_builder_overrides_one_signal() {
        let w = ScoreWeights::builder().weight(Signal::Section, 50).build();
        assert_eq!(w.section, 50);
        assert_eq!(w.title_prefix, 6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let w: ScoreWeights = serde_json::from_str(r#"{ "tag": 9 }"#).unwrap();
        assert_eq!(w.tag, 9);
        assert_eq!(w.genre_hint, 4);
    }
}
