//! The pieces of the relevance pipeline.
//!
//! - [`normalize`](crate::scoring::normalize): canonical comparison form for text.
//! - [`genre`](crate::scoring::genre): infers catalog genres mentioned by a query.
//! - [`relevance`](crate::scoring::relevance): the additive per-game scorer.

/// Genre inference over the catalog.
pub mod genre;
/// Text normalization.
pub mod normalize;
/// The additive relevance scorer.
pub mod relevance;

pub use genre::{catalog_genres, infer_genres};
pub use normalize::normalize;
pub use relevance::Scorer;
