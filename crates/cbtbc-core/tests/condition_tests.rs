//! Windowed condition behaviour tests.

use cbtbc_core::prelude::*;
use serde_json::json;

fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().expect("params must be an object")
}

#[test]
fn numeric_window_holds_for_n_minus_one_following_words() {
    for n in 1..6usize {
        let mut cond = Condition::numeric_in_window(n);
        assert!(cond.check("42"), "qualifying word opens the window (n={})", n);
        for i in 1..n {
            assert!(cond.check("filler"), "word {} after match is inside window {}", i, n);
        }
        assert!(!cond.check("filler"), "word {} after match closes window {}", n, n);
        assert!(!cond.check("filler"));
        assert!(cond.check("3.14"), "a new match reopens the window");
    }
}

#[test]
fn reset_behaves_like_fresh_construction() {
    let words = ["1", "a", "50%", "b", "rates", "c", "d"];
    let fresh = || {
        vec![
            Condition::numeric_in_window(2),
            Condition::percent_in_window(2),
            Condition::numeric_or_percent_in_window(3),
            Condition::keyword_in_window(2, ["rates"]),
            Condition::keyword_in_window(1, ["a"]).negate(),
        ]
    };

    let mut used = fresh();
    for cond in used.iter_mut() {
        for w in ["9", "rates", "a", "10%"] {
            cond.check(w);
        }
        cond.reset();
    }

    let mut pristine = fresh();
    for (a, b) in used.iter_mut().zip(pristine.iter_mut()) {
        for w in words {
            assert_eq!(a.check(w), b.check(w), "{} diverged after reset at '{}'", a, w);
        }
    }
}

#[test]
fn negation_inverts_every_word() {
    let words = ["x", "5", "y", "z", "w", "6%", "v"];
    let mut plain = Condition::numeric_or_percent_in_window(2);
    let mut negated = Condition::numeric_or_percent_in_window(2).negate();
    for w in words {
        assert_eq!(negated.check(w), !plain.check(w), "word '{}'", w);
    }
}

#[test]
fn negation_reset_reaches_wrapped_condition() {
    let mut negated = Condition::numeric_in_window(2).negate();
    assert!(!negated.check("100.5"));
    negated.reset();
    assert_eq!(negated.window().last_distance(), None);
    assert!(negated.check("not a float"));
}

#[test]
fn factory_builds_every_kind() {
    let p = params(json!({"n_words": 2, "keywords": ["test", "keyword"]}));
    for kind in ConditionKind::ALL {
        let cond = create_condition(kind.as_str(), &p).expect("factory should build");
        assert_eq!(cond.window().n_words(), 2);
    }
}

#[test]
fn factory_requires_keywords_for_keyword_kind() {
    let err = create_condition("keyword-in-window", &params(json!({"n_words": 2}))).unwrap_err();
    match err {
        CbtbcError::Configuration(ConfigError::MissingParameter { parameter, .. }) => {
            assert_eq!(parameter, "keywords")
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn factory_built_keyword_condition_matches_words() {
    let mut cond = create_condition(
        "keyword-in-window",
        &params(json!({"n_words": 2, "keywords": ["test", "keyword"]})),
    )
    .unwrap();
    assert!(cond.check("test"));
    cond.reset();
    assert!(!cond.check("not a keyword"));
}
