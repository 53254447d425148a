//! The classification model: an ordered condition list plus a combinator.
//!
//! Condition order is significant. Masks produced by the optimizer and
//! saved snapshots both address conditions by position.

use crate::normalize::Normalizer;
use cbtbc_core::prelude::*;
use std::fmt;
use tracing::{debug, info};

/// Conditions-based binary text classifier.
#[derive(Debug, Clone, Default)]
pub struct ClassificationModel {
    conditions: Vec<Condition>,
    combinator: Combinator,
    /// Scratch buffer for per-word results, reused across runs.
    results: Vec<bool>,
}

impl ClassificationModel {
    /// Empty model. Always classifies as negative until conditions are added.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conditions(conditions: Vec<Condition>, combinator: Combinator) -> Self {
        Self {
            conditions,
            combinator,
            results: Vec::new(),
        }
    }

    /// Build a model from a declarative list.
    ///
    /// Each item is either a combinator keyword (`"and"` / `"or"`, the last
    /// one wins) or a condition kind name. Kind names consume `params`
    /// positionally, so `params` must hold exactly one mapping per kind.
    ///
    /// ```rust
    /// use cbtbc_model::prelude::*;
    /// use serde_json::json;
    ///
    /// let params: Vec<Params> = vec![
    ///     json!({"n_words": 3}).as_object().cloned().unwrap(),
    ///     json!({"n_words": 3, "keywords": ["rates"]}).as_object().cloned().unwrap(),
    /// ];
    /// let model = ClassificationModel::from_declaration(
    ///     &["or", "numeric-or-percent-in-window", "keyword-in-window"],
    ///     &params,
    /// ).unwrap();
    /// assert_eq!(model.len(), 2);
    /// assert_eq!(model.combinator(), Combinator::Or);
    /// ```
    pub fn from_declaration<S: AsRef<str>>(items: &[S], params: &[Params]) -> Result<Self> {
        let kinds = items
            .iter()
            .filter(|item| Combinator::from_keyword(item.as_ref()).is_none())
            .count();
        if params.len() != kinds {
            return Err(CbtbcError::length_mismatch("condition params", kinds, params.len()));
        }

        let mut combinator = Combinator::default();
        let mut conditions = Vec::with_capacity(kinds);
        let mut params = params.iter();

        for item in items {
            let item = item.as_ref();
            if let Some(c) = Combinator::from_keyword(item) {
                combinator = c;
            } else if let Some(p) = params.next() {
                conditions.push(create_condition(item, p)?);
            }
        }

        debug!(
            conditions = conditions.len(),
            combinator = %combinator,
            "Built model from declaration"
        );
        Ok(Self::with_conditions(conditions, combinator))
    }

    /// Append a condition at the end of the evaluation order.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn set_combinator(&mut self, combinator: Combinator) {
        self.combinator = combinator;
    }

    /// Number of conditions a mask activates (all of them when absent).
    pub fn active_count(&self, mask: Option<&[bool]>) -> Result<usize> {
        match mask {
            Some(m) => {
                ensure_mask_len(m, self.conditions.len())?;
                Ok(popcount(m))
            }
            None => Ok(self.conditions.len()),
        }
    }

    /// Reset the state of every condition, active or not.
    pub fn reset(&mut self) {
        for cond in &mut self.conditions {
            cond.reset();
        }
    }

    /// Classify a word stream using every condition.
    pub fn run<S: AsRef<str>>(&mut self, words: &[S]) -> bool {
        self.evaluate(words, None)
    }

    /// Classify a word stream, restricted to the conditions `mask` selects.
    ///
    /// Returns `true` at the first word where the active conditions satisfy
    /// the combinator; later words are not evaluated. With no active
    /// conditions, whether masked off or never configured, the result is
    /// `false`, matching a model emptied by [`filter`](Self::filter).
    pub fn run_masked<S: AsRef<str>>(&mut self, words: &[S], mask: Option<&[bool]>) -> Result<bool> {
        if let Some(m) = mask {
            ensure_mask_len(m, self.conditions.len())?;
        }
        Ok(self.evaluate(words, mask))
    }

    /// Normalize a raw document and classify it.
    pub fn classify<N: Normalizer + ?Sized>(&mut self, normalizer: &N, document: &str) -> bool {
        let words = normalizer.normalize(document);
        self.run(&words)
    }

    fn evaluate<S: AsRef<str>>(&mut self, words: &[S], mask: Option<&[bool]>) -> bool {
        let active = mask.map_or(self.conditions.len(), popcount);
        if active == 0 {
            return false;
        }
        self.reset();

        let Self {
            conditions,
            combinator,
            results,
        } = self;

        for word in words {
            let word = word.as_ref();
            results.clear();
            // Every active condition sees every word; checks are stateful.
            for (i, cond) in conditions.iter_mut().enumerate() {
                if mask.map_or(true, |m| m[i]) {
                    results.push(cond.check(word));
                }
            }
            if combinator.combine(results) {
                return true;
            }
        }
        false
    }

    /// Permanently keep only the conditions whose mask entry is `true`,
    /// preserving their relative order.
    pub fn filter(&mut self, mask: &[bool]) -> Result<()> {
        ensure_mask_len(mask, self.conditions.len())?;
        let before = self.conditions.len();
        let mut keep = mask.iter();
        self.conditions.retain(|_| keep.next().copied().unwrap_or(false));
        info!(before, after = self.conditions.len(), "Filtered model conditions");
        Ok(())
    }
}

// Models compare by configuration: combinator and ordered conditions.
impl PartialEq for ClassificationModel {
    fn eq(&self, other: &Self) -> bool {
        self.combinator == other.combinator && self.conditions == other.conditions
    }
}

impl fmt::Display for ClassificationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(f, "ClassificationModel[{}]({})", self.combinator, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    fn float_and_keyword() -> ClassificationModel {
        ClassificationModel::with_conditions(
            vec![
                Condition::numeric_in_window(3),
                Condition::keyword_in_window(3, ["test", "keyword"]),
            ],
            Combinator::And,
        )
    }

    #[test]
    fn default_combinator_is_and() {
        assert_eq!(float_and_keyword().combinator(), Combinator::And);
    }

    #[test]
    fn empty_model_is_always_negative() {
        let mut model = ClassificationModel::new();
        assert!(!model.run(&words("1.2 sample test")));
        assert!(!model.run_masked(&words("1.2"), Some(&[][..])).unwrap());
    }

    #[test]
    fn and_requires_all_conditions_at_one_word() {
        let mut model = float_and_keyword();
        assert!(model.run(&words("1.2 sample test")));
        assert!(!model.run(&words("1.2 sample sample")));
    }

    #[test]
    fn state_does_not_leak_between_runs() {
        let mut model = float_and_keyword();
        assert!(model.run(&words("1.2 test")));
        // Would pass if the numeric window were still open from the last run.
        assert!(!model.run(&words("test")));
    }

    #[test]
    fn empty_active_subset_is_negative() {
        let mut model = float_and_keyword();
        assert!(!model.run_masked(&words("1.2 test"), Some(&[false, false][..])).unwrap());
        assert!(!model.run_masked::<&str>(&[], Some(&[false, false][..])).unwrap());
        model.set_combinator(Combinator::Or);
        assert!(!model.run_masked(&words("1.2 test"), Some(&[false, false][..])).unwrap());
    }

    #[test]
    fn all_false_mask_matches_emptied_model() {
        let mut masked = float_and_keyword();
        let mut emptied = float_and_keyword();
        emptied.filter(&[false, false]).unwrap();
        assert!(emptied.is_empty());
        for text in ["hello world", "1.2 test", ""] {
            let doc = words(text);
            assert_eq!(
                masked.run_masked(&doc, Some(&[false, false][..])).unwrap(),
                emptied.run(&doc),
                "text {:?}",
                text
            );
        }
    }

    #[test]
    fn pushed_conditions_join_the_evaluation() {
        let mut model = ClassificationModel::new();
        model.push(Condition::numeric_in_window(1));
        assert!(model.run(&words("7")));
        model.push(Condition::keyword_in_window(1, ["late"]));
        assert_eq!(model.len(), 2);
        assert!(!model.run(&words("7")));
        assert!(model.run(&words("7 late")));
    }

    #[test]
    fn active_count_follows_the_mask() {
        let model = float_and_keyword();
        assert_eq!(model.active_count(None).unwrap(), 2);
        assert_eq!(model.active_count(Some(&[false, true][..])).unwrap(), 1);
        assert_eq!(model.active_count(Some(&[false, false][..])).unwrap(), 0);
        assert!(model.active_count(Some(&[true][..])).is_err());
    }

    #[test]
    fn mask_length_is_validated() {
        let mut model = float_and_keyword();
        let err = model.run_masked(&words("1"), Some(&[true][..])).unwrap_err();
        assert!(matches!(err, CbtbcError::Validation { expected: 2, found: 1, .. }));
        assert!(model.filter(&[true, true, false]).is_err());
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn filter_keeps_order() {
        let mut model = ClassificationModel::with_conditions(
            vec![
                Condition::numeric_in_window(1),
                Condition::percent_in_window(2),
                Condition::keyword_in_window(3, ["x"]),
            ],
            Combinator::Or,
        );
        model.filter(&[true, false, true]).unwrap();
        assert_eq!(
            model.conditions(),
            &[
                Condition::numeric_in_window(1),
                Condition::keyword_in_window(3, ["x"])
            ]
        );
        assert_eq!(model.combinator(), Combinator::Or);
    }

    #[test]
    fn declaration_requires_one_params_entry_per_kind() {
        let p = serde_json::json!({"n_words": 3}).as_object().cloned().unwrap();
        let err = ClassificationModel::from_declaration(&["numeric-in-window", "percent-in-window"], &[p.clone()])
            .unwrap_err();
        assert!(matches!(err, CbtbcError::Validation { expected: 2, found: 1, .. }));

        let err = ClassificationModel::from_declaration(&["and", "numeric-in-window"], &[p.clone(), p])
            .unwrap_err();
        assert!(matches!(err, CbtbcError::Validation { expected: 1, found: 2, .. }));
    }

    #[test]
    fn declaration_rejects_unknown_kind() {
        let p = serde_json::json!({"n_words": 3}).as_object().cloned().unwrap();
        let err = ClassificationModel::from_declaration(&["AND", "numeric-in-window"], &[p.clone(), p])
            .unwrap_err();
        assert!(matches!(err, CbtbcError::UnknownCondition(ref k) if k == "AND"));
    }

    #[test]
    fn last_combinator_keyword_wins() {
        let p = serde_json::json!({"n_words": 1}).as_object().cloned().unwrap();
        let model =
            ClassificationModel::from_declaration(&["or", "numeric-in-window", "and"], &[p]).unwrap();
        assert_eq!(model.combinator(), Combinator::And);
    }
}
