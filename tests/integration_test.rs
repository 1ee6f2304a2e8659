// Integration tests for simrec
use simrec_core::{Error, Pearson, Preferences, Recommender, Similarity};
use simrec_loader::{load_preferences, LoadOptions, LoaderError, RecommendationReport};
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const RESTAURANTS: &str = r#"[
    {"business_id": "b1", "name": "Pizzeria"},
    {"business_id": "b2", "name": "Sushi Bar"},
    {"business_id": "b3", "name": "Taqueria"},
    {"business_id": "b4", "name": "Noodle House"}
]"#;

const REVIEWS: &str = r#"{"user_id": "alice", "restaurant_id": "b1", "rating": 5}
{"user_id": "alice", "restaurant_id": "b2", "rating": 3}
{"user_id": "bob", "restaurant_id": "b1", "rating": 5}
{"user_id": "bob", "restaurant_id": "b2", "rating": 4}
{"user_id": "bob", "restaurant_id": "b3", "rating": 2}
{"user_id": "carol", "restaurant_id": "b1", "rating": 1}
{"user_id": "carol", "restaurant_id": "b2", "rating": 1}
{"user_id": "carol", "restaurant_id": "b4", "rating": 5}
"#;

#[test]
fn test_end_to_end_recommendation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reviews = write(temp_dir.path(), "reviews.jsonl", REVIEWS);
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);

    let prefs = load_preferences(&reviews, &restaurants, &LoadOptions::default()).unwrap();
    assert_eq!(prefs.len(), 3);
    assert_eq!(prefs.rating("bob", "Taqueria"), Some(2.0));

    let rankings = Recommender::new(Pearson).recommend(&prefs, "alice").unwrap();
    // carol has zero variance over the shared items, so only bob contributes
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].item, "Taqueria");
    assert!((rankings[0].score - 2.0).abs() < 1e-12);

    let output = temp_dir.path().join("userrec.json");
    RecommendationReport::from_rankings(&rankings).write_to(&output).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["recommendations"][0]["id"], "Taqueria");
    assert_eq!(json["recommendations"][0]["sim_score"], 2.0);
}

#[test]
fn test_unknown_target_user() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reviews = write(temp_dir.path(), "reviews.jsonl", REVIEWS);
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);

    let prefs = load_preferences(&reviews, &restaurants, &LoadOptions::default()).unwrap();
    let err = Recommender::new(Pearson).recommend(&prefs, "dave").unwrap_err();
    assert_eq!(err, Error::UnknownUser("dave".to_string()));
}

#[test]
fn test_empty_inputs_produce_empty_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reviews = write(temp_dir.path(), "reviews.json", "[]");
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);

    let prefs = load_preferences(&reviews, &restaurants, &LoadOptions::default()).unwrap();
    assert!(prefs.is_empty());

    let rankings = Recommender::new(Pearson).recommend(&prefs, "alice").unwrap();
    assert!(rankings.is_empty());
    assert!(RecommendationReport::from_rankings(&rankings).is_empty());
}

#[test]
fn test_missing_file_aborts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);

    let err = load_preferences(
        temp_dir.path().join("reviews.json"),
        &restaurants,
        &LoadOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LoaderError::NotFound(_)));
}

#[test]
fn test_dangling_item_reference() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reviews = write(
        temp_dir.path(),
        "reviews.jsonl",
        &format!("{REVIEWS}{{\"user_id\": \"bob\", \"restaurant_id\": \"b9\", \"rating\": 4}}\n"),
    );
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);

    let err = load_preferences(&reviews, &restaurants, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoaderError::UnknownItem { .. }));

    let options = LoadOptions { skip_unknown_items: true };
    let prefs = load_preferences(&reviews, &restaurants, &options).unwrap();
    assert_eq!(prefs.rating_count(), 8);
}

#[test]
fn test_custom_similarity_strategy() {
    let prefs = Preferences::from_triples([
        ("t", "a", 3.0),
        ("u", "a", 1.0),
        ("u", "b", 4.0),
        ("v", "c", 2.0),
    ])
    .unwrap();

    // Everyone is a neighbour with equal weight
    let uniform = |prefs: &Preferences, a: &str, b: &str| -> simrec_core::Result<f64> {
        if prefs.contains_user(a) && prefs.contains_user(b) {
            Ok(1.0)
        } else {
            Err(Error::InvalidArgument(format!("{a} or {b} missing")))
        }
    };
    assert_eq!(uniform.compute(&prefs, "t", "u").unwrap(), 1.0);

    let rankings = Recommender::new(uniform).recommend(&prefs, "t").unwrap();
    let items: Vec<&str> = rankings.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["b", "c"]);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reviews = write(temp_dir.path(), "reviews.jsonl", REVIEWS);
    let restaurants = write(temp_dir.path(), "restaurants.json", RESTAURANTS);
    let prefs = load_preferences(&reviews, &restaurants, &LoadOptions::default()).unwrap();

    let recommender = Recommender::new(Pearson);
    let parallel = recommender.recommend_parallel(&prefs, "alice").unwrap();
    let sequential = recommender.recommend(&prefs, "alice").unwrap();
    assert_eq!(parallel, sequential);
}
