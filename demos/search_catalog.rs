//! Search a games catalog from the command line.
//!
//! ```text
//! cargo run --example search_catalog -- path/to/games.json "tendances"
//! RUST_LOG=debug cargo run --example search_catalog -- "" "arcade"
//! ```
//!
//! An empty path searches a small built-in catalog.

use playdex::prelude::*;
use std::time::Instant;

const SAMPLE: &str = r#"{
  "games": {
    "snake": { "title": "Snake Game", "genre": "Arcade", "tags": ["classic", "retro"] },
    "block-puzzle": { "title": "Block Puzzle", "genre": "Puzzle" },
    "space-duel": { "title": "Space Duel", "genre": "2 Player", "tags": ["versus"] },
    "tennis-pro": { "title": "Ténnis Pro", "genre": "Sport" },
    "pixel-run": { "title": "Pixel Run", "genre": "Arcade", "tags": ["runner"] }
  },
  "sections": {
    "featured": ["snake", "tennis-pro"],
    "trending": ["pixel-run", "space-duel"]
  }
}"#;

fn main() -> playdex::error::Result<()> {
  env_logger::init();

  let mut args = std::env::args().skip(1);
  let path = args.next().unwrap_or_default();
  let query = args.collect::<Vec<_>>().join(" ");

  let catalog = if path.is_empty() {
    Catalog::from_json(SAMPLE)?
  } else {
    Catalog::load(&path)?
  };

  let engine = SearchEngine::default();
  let start = Instant::now();
  let outcome = engine.search(&catalog, &query);
  let elapsed = start.elapsed();

  match outcome {
    SearchOutcome::Prompt => {
      println!("Type something to find games. Sections:");
      for row in catalog.home_rows() {
        println!("  {} ({} games)", row.title, row.games.len());
      }
    }
    SearchOutcome::Results(results) => {
      println!("Results for \"{}\" in {:?}", results.query, elapsed);
      if let Some(section) = &results.section {
        println!("Includes section: {}", title_case(section));
      }
      if let Some(genre) = results.inferred_genres.first() {
        println!("Genre match: {}", title_case(genre));
      }
      if results.is_empty() {
        println!("No games found.");
      }
      for m in results.explain() {
        println!("{:>4}  {:<24} {:?}", m.score, m.game.title, m.signals);
      }
    }
  }

  Ok(())
}
