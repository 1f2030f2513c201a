//! The read-only game catalog and the browsing views built on top of it.

pub mod detail;
pub mod sections;
pub mod store;

pub use detail::{resolve_description, GameDetail};
pub use sections::{title_case, SectionRow};
pub use store::{Catalog, CatalogBuilder};
