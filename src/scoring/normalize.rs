//! Text normalization utilities.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text into its canonical comparison form.
///
/// The text is lowercased, canonically decomposed (NFD) and stripped of every
/// combining mark, so `"Ténnis"` and `"tennis"` compare equal.
pub fn normalize(text: &str) -> String {
  text
    .to_lowercase()
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .collect()
}

/// Normalize an optional field, treating `None` as the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
  text.map(normalize).unwrap_or_default()
}
