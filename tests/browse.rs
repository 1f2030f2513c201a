use playdex::prelude::*;
use std::io::Write;

const GAMES_JSON: &str = r#"{
  "games": {
    "snake": {
      "title": "Snake Game",
      "image": "/img/snake.png",
      "genre": "Arcade",
      "tags": ["classic"],
      "cover": "/img/snake-cover.jpg",
      "description": "/desc/snake.html"
    },
    "block-puzzle": {
      "title": "Block Puzzle",
      "image": "/img/block.png",
      "genre": "Puzzle",
      "playPath": "/embed/block/index.html",
      "shortDescription": "Fit the blocks."
    },
    "space-duel": { "title": "Space Duel", "image": "/img/duel.png", "genre": "2 Player" }
  },
  "sections": {
    "featured": ["snake", "block-puzzle"],
    "trending": ["space-duel", "retired-game"]
  }
}"#;

#[test]
fn test_load_from_file_and_browse() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(GAMES_JSON.as_bytes()).unwrap();

  let catalog = Catalog::load(file.path()).unwrap();
  assert_eq!(catalog.len(), 3);

  let rows = catalog.home_rows();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].title, "Featured");
  assert_eq!(rows[1].title, "trending");
  assert_eq!(rows[1].games.len(), 1);

  let trending = catalog.section_items("trending").unwrap();
  assert_eq!(trending[0].id, "space-duel");

  // undefined section shows everything
  assert_eq!(catalog.section_items("multiplayer").unwrap().len(), 3);
  assert_eq!(title_case("multiplayer"), "Multiplayer");
}

#[test]
fn test_game_page() {
  let catalog = Catalog::from_json(GAMES_JSON).unwrap();

  let snake = catalog.detail("snake").unwrap();
  assert_eq!(snake.player_src, "/games/snake/index.html");
  assert_eq!(snake.cover, "/img/snake-cover.jpg");
  assert_eq!(snake.more_games.len(), 2);

  let block = catalog.detail("block-puzzle").unwrap();
  assert_eq!(block.player_src, "/embed/block/index.html");
  assert_eq!(block.cover, "/img/block.png");
  assert_eq!(block.summary(), "Fit the blocks.");

  let public = tempfile::tempdir().unwrap();
  std::fs::create_dir(public.path().join("desc")).unwrap();
  std::fs::write(public.path().join("desc/snake.html"), "<h2>Snake</h2>").unwrap();
  let html = resolve_description(snake.game.description.as_deref(), public.path());
  assert_eq!(html.as_deref(), Some("<h2>Snake</h2>"));
}

#[test]
fn test_search_against_loaded_catalog() {
  let catalog = Catalog::from_json(GAMES_JSON).unwrap();

  // "trending" resolves the section; space-duel is its only live member
  let outcome = search("trending now", &catalog);
  let res = outcome.results().unwrap();
  assert_eq!(res.section.as_deref(), Some("trending"));
  assert_eq!(res.games()[0].id, "space-duel");

  let outcome = search("classic", &catalog);
  assert_eq!(outcome.results().unwrap().games()[0].id, "snake");
}

#[test]
fn test_player_flow_for_detail_page() {
  let catalog = Catalog::from_json(GAMES_JSON).unwrap();
  let detail = catalog.detail("snake").unwrap();
  assert!(!detail.player_src.is_empty());

  let mut player = Player::new();
  let generation = player.generation();
  player.handle(PlayerEvent::ProbeResolved {
    generation,
    status: ProbeStatus::Available,
  });
  player.handle(PlayerEvent::Start);
  assert_eq!(player.handle(PlayerEvent::FrameLoaded), PlayerState::Playing);
}

#[test]
fn test_malformed_catalog_entries_are_neutralized() {
  let catalog = Catalog::from_json(
    r#"{
      "games": {
        "alpha": { "title": "Alpha", "genre": "Arcade", "tags": null },
        "beta": { "title": null, "image": null, "genre": 3, "tags": ["arcade", 1] },
        "gamma": "not an object",
        "delta": { "title": "Delta Arcade", "cover": ["x"] }
      },
      "sections": { "trending": ["beta", null] }
    }"#,
  )
  .unwrap();
  assert_eq!(catalog.len(), 3);
  assert!(catalog.get("gamma").is_none());

  // every surviving entry can be scored, sorted and browsed
  for q in ["arcade", "tendances", "alpha", "zzz"] {
    assert!(!search(q, &catalog).is_prompt());
  }
  let outcome = search("arcade", &catalog);
  let ids: Vec<&str> = outcome.results().unwrap().iter().map(|g| g.id.as_str()).collect();
  assert_eq!(ids.len(), 3);
  assert!(ids.contains(&"beta"));

  assert_eq!(catalog.section_items("trending").unwrap()[0].id, "beta");
  assert_eq!(catalog.detail("delta").unwrap().cover, "");
}
