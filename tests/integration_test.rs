// Integration tests for cinerec
use cinerec::dataset::sample_catalog;
use cinerec::heatmap;
use cinerec_core::{Catalog, Error, FeatureMatrix, Item, Recommender, ScoreMatrix};

fn build_scores(catalog: &Catalog) -> ScoreMatrix {
    let features = FeatureMatrix::from_catalog(catalog).unwrap();
    ScoreMatrix::from_features(&features)
}

#[test]
fn test_vectorize_deterministic_over_sample() {
    let catalog = sample_catalog();
    let a = FeatureMatrix::from_catalog(&catalog).unwrap();
    let b = FeatureMatrix::from_catalog(&catalog).unwrap();
    assert_eq!(a.vocabulary().tags(), b.vocabulary().tags());
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn test_sample_scores_symmetric_and_bounded() {
    let scores = build_scores(&sample_catalog());
    for i in 0..scores.len() {
        assert!((scores.get(i, i) - 1.0).abs() < 1e-9);
        for j in 0..scores.len() {
            assert_eq!(scores.get(i, j), scores.get(j, i));
            assert!((0.0..=1.0).contains(&scores.get(i, j)));
        }
    }
}

#[test]
fn test_scenario_genre_overlap_ranking() {
    // Sci-fi/action titles must rank above the romance outlier
    let catalog = Catalog::new(vec![
        Item::new(1, "Inception", ["Action", "Sci-Fi", "Thriller"]),
        Item::new(2, "Avengers: Endgame", ["Action", "Adventure", "Sci-Fi"]),
        Item::new(3, "The Matrix", ["Sci-Fi", "Action"]),
        Item::new(4, "Titanic", ["Romance", "Drama"]),
    ]);
    let recommender = Recommender::new(catalog).unwrap();
    let results = recommender.recommend("Inception", 2).unwrap();

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Avengers: Endgame"));
    assert!(titles.contains(&"The Matrix"));
    assert!(!titles.contains(&"Titanic"));
}

#[test]
fn test_scenario_unknown_title_is_recoverable() {
    let recommender = Recommender::new(sample_catalog()).unwrap();
    let err = recommender.recommend("Nonexistent Movie", 3).unwrap_err();
    assert!(matches!(err, Error::TitleNotFound(_)));

    // The recommender stays usable after a failed lookup
    assert!(recommender.recommend("Titanic", 3).is_ok());
}

#[test]
fn test_scenario_top_n_exceeds_catalog() {
    let recommender = Recommender::new(sample_catalog()).unwrap();
    let results = recommender.recommend("Titanic", 10).unwrap();
    assert_eq!(results.len(), 7);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_scenario_identical_tag_sets() {
    // Titanic and The Notebook share the same tags in the sample catalog
    let recommender = Recommender::new(sample_catalog()).unwrap();
    let results = recommender.recommend("Titanic", 1).unwrap();
    assert_eq!(results[0].title, "The Notebook");
    assert!((results[0].score - 1.0).abs() < 1e-9);
}

#[test]
fn test_zero_tag_item_never_recommended_above_tagged() {
    let catalog = Catalog::new(vec![
        Item::new(1, "Query", ["Action", "Drama"]),
        Item::new(2, "Untagged", Vec::<String>::new()),
        Item::new(3, "Partial", ["Action"]),
    ]);
    let scores = build_scores(&catalog);
    for j in 0..scores.len() {
        assert_eq!(scores.get(1, j), 0.0);
    }

    let recommender = Recommender::new(catalog).unwrap();
    let results = recommender.recommend("Query", 2).unwrap();
    assert_eq!(results[0].title, "Partial");
    assert_eq!(results[1].title, "Untagged");
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn test_catalog_json_end_to_end() {
    let json = r#"[
        {"id": 1, "title": "Inception", "tags": ["Action", "Sci-Fi", "Thriller"]},
        {"id": 2, "title": "The Matrix", "tags": ["Sci-Fi", "Action"]},
        {"id": 3, "title": "Titanic", "tags": ["Romance", "Drama"]}
    ]"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    let recommender = Recommender::new(catalog).unwrap();
    let results = recommender.recommend("Inception", 1).unwrap();
    assert_eq!(results[0].title, "The Matrix");
}

#[test]
fn test_heatmap_is_read_only_consumer() {
    let recommender = Recommender::new(sample_catalog()).unwrap();
    let before = recommender.scores().clone();
    let grid = heatmap::render(recommender.catalog(), recommender.scores());
    assert!(grid.contains("The Dark Knight"));
    assert_eq!(recommender.scores(), &before);
}
