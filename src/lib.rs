//! Playdex - catalog search and browsing for embeddable browser games.
//!
//! Playdex ranks a static game catalog against free-text queries using
//! normalized substring signals, bilingual section aliases and genre hints,
//! and builds the home, section and game views on top of the same catalog.

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod types;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::aliases::*;
    pub use crate::catalog::*;
    pub use crate::config::*;
    pub use crate::context::*;
    pub use crate::engine::*;
    pub use crate::error::CatalogError;
    pub use crate::player::*;
    pub use crate::rules::*;
    pub use crate::scoring::*;
    pub use crate::types::*;
}
