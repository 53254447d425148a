//! Classification model integration tests.

use cbtbc_model::prelude::*;
use serde_json::json;

fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().expect("params must be an object")
}

fn rates_model() -> ClassificationModel {
    ClassificationModel::from_declaration(
        &["numeric-or-percent-in-window", "keyword-in-window"],
        &[
            params(json!({"n_words": 3})),
            params(json!({"n_words": 3, "keywords": ["rates"]})),
        ],
    )
    .expect("declaration is valid")
}

#[test]
fn keyword_and_percent_within_window_classify_positive() {
    let mut model = rates_model();
    assert_eq!(model.combinator(), Combinator::And);
    assert!(model.run(&["special", "rates", "is", "100.00%"]));
}

#[test]
fn missing_keyword_classifies_negative() {
    let mut model = rates_model();
    assert!(!model.run(&["special", "price", "is", "100.00%"]));
}

#[test]
fn keyword_outside_window_classifies_negative() {
    let mut model = rates_model();
    // "rates" is three words before the percentage: distance 3 is not < 3.
    assert!(!model.run(&["rates", "are", "now", "100.00%"]));
}

#[test]
fn and_needs_simultaneous_truth_or_needs_any() {
    let words = ["7", "a", "b", "c", "rates"];
    let mut model = rates_model();
    assert!(!model.run(&words), "numeric window closed before keyword");

    model.set_combinator(Combinator::Or);
    assert!(model.run(&words), "numeric alone satisfies OR");
}

#[test]
fn filtering_matches_masked_run() {
    let documents: Vec<Vec<&str>> = vec![
        vec!["special", "rates", "is", "100.00%"],
        vec!["special", "price", "is", "100.00%"],
        vec!["rates", "only"],
        vec!["12", "percent", "rates"],
        vec![],
    ];
    let base = ClassificationModel::with_conditions(
        vec![
            Condition::numeric_or_percent_in_window(3),
            Condition::keyword_in_window(3, ["rates"]),
            Condition::percent_in_window(2).negate(),
        ],
        Combinator::And,
    );

    for bits in 0..8u8 {
        let mask: Vec<bool> = (0..3).map(|i| bits & (1 << i) != 0).collect();
        let mut masked = base.clone();
        let mut filtered = base.clone();
        filtered.filter(&mask).unwrap();

        for doc in &documents {
            let expected = masked.run_masked(doc, Some(mask.as_slice())).unwrap();
            assert_eq!(filtered.run(doc), expected, "mask {:?} doc {:?}", mask, doc);
        }
    }
}

#[test]
fn classify_normalizes_markup() {
    let mut model = rates_model();
    let normalizer = TextNormalizer::new();
    assert!(model.classify(&normalizer, "<p>Special <b>Rates</b> is 100.00 %</p>"));
    assert!(!model.classify(&normalizer, "<p>Special price is 100.00%</p>"));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("model.json");

    let mut model = rates_model();
    model.set_combinator(Combinator::Or);
    save_model(&model, &path).unwrap();

    let mut loaded = load_model(&path).unwrap();
    assert_eq!(loaded, model);
    assert_eq!(loaded.combinator(), Combinator::Or);
    assert_eq!(
        loaded.run(&["price", "42"]),
        model.run(&["price", "42"]),
        "restored model classifies identically"
    );
}

#[test]
fn loading_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_model(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CbtbcError::Io(_)));
}
