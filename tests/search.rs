use playdex::prelude::*;

fn results<'a>(outcome: &'a SearchOutcome<'_>) -> &'a SearchResults<'a> {
  outcome.results().expect("expected results, got prompt")
}

fn ids(outcome: &SearchOutcome<'_>) -> Vec<String> {
  results(outcome).iter().map(|g| g.id.clone()).collect()
}

fn snake_catalog() -> Catalog {
  Catalog::from_json(
    r#"{
      "games": {
        "snake": { "title": "Snake Game", "genre": "Arcade" },
        "puzzle1": { "title": "Block Puzzle", "genre": "Puzzle" }
      },
      "sections": {}
    }"#,
  )
  .unwrap()
}

#[test]
fn test_end_to_end_snake() {
  let catalog = snake_catalog();

  let outcome = search("snake", &catalog);
  assert_eq!(ids(&outcome), vec!["snake"]);

  let top = &results(&outcome).explain()[0];
  // title prefix + title contains + id contains
  assert_eq!(top.score, 6 + 4 + 3);
  assert_eq!(
    top.signals,
    vec![Signal::TitlePrefix, Signal::TitleContains, Signal::IdContains]
  );

  let outcome = search("zzz", &catalog);
  assert!(!outcome.is_prompt());
  assert!(results(&outcome).is_empty());
}

#[test]
fn test_empty_query_is_prompt() {
  let catalog = snake_catalog();
  assert!(search("", &catalog).is_prompt());
  assert!(search("   \t", &catalog).is_prompt());
  assert!(search("", &Catalog::default()).is_prompt());
}

#[test]
fn test_section_alias_boost() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Foo").with_genre("Arcade"))
    .game(GameRecord::new("b", "Bar").with_genre("Puzzle"))
    .section("trending", ["a"])
    .build()
    .unwrap();

  let outcome = search("tendance", &catalog);
  let res = results(&outcome);
  assert_eq!(res.section.as_deref(), Some("trending"));
  assert_eq!(ids(&outcome), vec!["a"]);
  assert_eq!(res.explain()[0].score, 5);
}

#[test]
fn test_tie_break_by_title_regardless_of_insertion_order() {
  for order in [["beta", "alpha"], ["alpha", "beta"]] {
    let builder = order.iter().fold(Catalog::builder(), |b, id| {
      let title = if *id == "alpha" { "Alpha" } else { "Beta" };
      b.game(GameRecord::new(*id, title).with_tag("space"))
    });
    let catalog = builder.build().unwrap();

    let outcome = search("space", &catalog);
    let titles: Vec<&str> = results(&outcome).iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);
  }
}

#[test]
fn test_title_tie_break_is_case_sensitive() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("1", "apple").with_tag("fruit"))
    .game(GameRecord::new("2", "Banana").with_tag("fruit"))
    .build()
    .unwrap();
  // uppercase sorts before lowercase byte-wise
  let outcome = search("fruit", &catalog);
  assert_eq!(ids(&outcome), vec!["2", "1"]);
}

#[test]
fn test_higher_score_first() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("space-race", "Orbit").with_tag("space"))
    .game(GameRecord::new("x", "Space Invaders"))
    .game(GameRecord::new("y", "Deep Space"))
    .build()
    .unwrap();

  let outcome = search("space", &catalog);
  // 10, 3 + 2, 4
  assert_eq!(ids(&outcome), vec!["x", "space-race", "y"]);
}

#[test]
fn test_genre_hint_reported_and_boosted() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Pac").with_genre("Arcade"))
    .game(GameRecord::new("b", "Tetra").with_genre("Puzzle"))
    .build()
    .unwrap();

  let outcome = search("Arcade games", &catalog);
  let res = results(&outcome);
  assert_eq!(res.inferred_genres, vec!["arcade".to_string()]);
  assert_eq!(ids(&outcome), vec!["a"]);
  assert_eq!(res.explain()[0].signals, vec![Signal::GenreHint]);
}

#[test]
fn test_diacritics_and_case_ignored() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("tennis", "Ténnis Pro").with_genre("Sport"))
    .build()
    .unwrap();
  assert_eq!(ids(&search("TENNIS", &catalog)), vec!["tennis"]);
  assert_eq!(ids(&search("ténnis", &catalog)), vec!["tennis"]);
}

#[test]
fn test_record_with_only_title() {
  let catalog = Catalog::from_json(r#"{ "games": { "x": { "title": "X" } } }"#).unwrap();
  for q in ["x", "arcade", "tendances", "é", "new"] {
    let _ = search(q, &catalog);
  }
  assert_eq!(ids(&search("x", &catalog)), vec!["x"]);
}

#[test]
fn test_limit_and_custom_aliases() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Alpha").with_tag("hot"))
    .game(GameRecord::new("b", "Beta").with_tag("hot"))
    .game(GameRecord::new("c", "Gamma"))
    .section("picks", ["c"])
    .build()
    .unwrap();

  let engine = SearchEngine::builder()
    .aliases(AliasTable::builder().section("picks", ["hot"]).build())
    .limit(2)
    .build();

  let outcome = engine.search(&catalog, "hot");
  // c gets the section boost (5) over the tag matches (2)
  assert_eq!(ids(&outcome), vec!["c", "a"]);
}

#[test]
fn test_engine_from_config() {
  let config = SearchConfig::from_json(r#"{ "weights": { "tag": 20 } }"#).unwrap();
  let engine = SearchEngine::from_config(config);

  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Chill Zone"))
    .game(GameRecord::new("b", "Other").with_tag("chill"))
    .build()
    .unwrap();
  assert_eq!(ids(&engine.search(&catalog, "chill")), vec!["b", "a"]);
}

#[test]
fn test_results_serialize_without_scores() {
  let catalog = snake_catalog();
  let outcome = search("snake", &catalog);
  let json = serde_json::to_value(&outcome).unwrap();
  assert_eq!(json["state"], "results");
  assert_eq!(json["games"][0]["id"], "snake");
  assert!(json["games"][0].get("score").is_none());

  let prompt = serde_json::to_value(search("", &catalog)).unwrap();
  assert_eq!(prompt["state"], "prompt");
}

mod ordering {
  use super::*;
  use proptest::prelude::*;

  const TITLES: [&str; 6] = ["Alpha", "alpha", "Beta", "Star Blast", "Blast", "Zeta"];

  proptest! {
    #[test]
    fn ranking_ignores_insertion_order(order in Just((0..TITLES.len()).collect::<Vec<_>>()).prop_shuffle()) {
      let catalog = order
        .iter()
        .fold(Catalog::builder(), |b, i| {
          b.game(GameRecord::new(format!("g{i}"), TITLES[*i]).with_tag("blast"))
        })
        .build()
        .unwrap();
      let sorted = (0..TITLES.len())
        .fold(Catalog::builder(), |b, i| {
          b.game(GameRecord::new(format!("g{i}"), TITLES[i]).with_tag("blast"))
        })
        .build()
        .unwrap();

      prop_assert_eq!(ids(&search("blast", &catalog)), ids(&search("blast", &sorted)));
    }
  }
}

#[test]
fn test_query_of_only_combining_marks_is_searched() {
  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Alpha"))
    .game(GameRecord::new("b", "Beta"))
    .build()
    .unwrap();

  let outcome = search("\u{301}", &catalog);
  assert!(!outcome.is_prompt());
  assert_eq!(ids(&outcome), vec!["a", "b"]);
}

#[test]
fn test_huge_weights_do_not_overflow() {
  let weights = ScoreWeights::builder()
    .weight(Signal::TitlePrefix, u32::MAX)
    .weight(Signal::TitleContains, u32::MAX)
    .build();
  let engine = SearchEngine::builder().weights(weights).build();
  let catalog = Catalog::builder()
    .game(GameRecord::new("a", "Alpha"))
    .build()
    .unwrap();

  let outcome = engine.search(&catalog, "alpha");
  assert_eq!(results(&outcome).explain()[0].score, u32::MAX);
}
