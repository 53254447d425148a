//! Objective functions: mask → misclassification count.

use cbtbc_model::model::ClassificationModel;
use cbtbc_core::prelude::*;

/// Cost of a condition mask. Lower is better.
pub trait Objective {
    fn cost(&mut self, mask: &[bool]) -> Result<usize>;
}

impl<F> Objective for F
where
    F: FnMut(&[bool]) -> Result<usize>,
{
    fn cost(&mut self, mask: &[bool]) -> Result<usize> {
        self(mask)
    }
}

/// Counts the documents a masked model run disagrees with.
///
/// Holds the model exclusively for the duration of a search; runs reset
/// condition state but never change the condition list.
pub struct CorpusObjective<'m, 'c, S> {
    model: &'m mut ClassificationModel,
    documents: &'c [Vec<S>],
    labels: &'c [bool],
}

impl<'m, 'c, S: AsRef<str>> CorpusObjective<'m, 'c, S> {
    /// Fails if `documents` and `labels` differ in length.
    pub fn new(
        model: &'m mut ClassificationModel,
        documents: &'c [Vec<S>],
        labels: &'c [bool],
    ) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(CbtbcError::length_mismatch(
                "labels",
                documents.len(),
                labels.len(),
            ));
        }
        Ok(Self {
            model,
            documents,
            labels,
        })
    }

    /// Number of conditions a mask must address.
    pub fn dimension(&self) -> usize {
        self.model.len()
    }
}

impl<S: AsRef<str>> Objective for CorpusObjective<'_, '_, S> {
    fn cost(&mut self, mask: &[bool]) -> Result<usize> {
        let mut disagreements = 0;
        for (doc, &label) in self.documents.iter().zip(self.labels) {
            if self.model.run_masked(doc, Some(mask))? != label {
                disagreements += 1;
            }
        }
        Ok(disagreements)
    }
}

/// Owned, length-checked training corpus of normalized documents.
#[derive(Debug, Clone, Default)]
pub struct LabeledCorpus {
    documents: Vec<Vec<String>>,
    labels: Vec<bool>,
}

impl LabeledCorpus {
    pub fn new(documents: Vec<Vec<String>>, labels: Vec<bool>) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(CbtbcError::length_mismatch(
                "labels",
                documents.len(),
                labels.len(),
            ));
        }
        Ok(Self { documents, labels })
    }

    pub fn push(&mut self, words: Vec<String>, label: bool) {
        self.documents.push(words);
        self.labels.push(label);
    }

    pub fn documents(&self) -> &[Vec<String>] {
        &self.documents
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }
}

impl FromIterator<(Vec<String>, bool)> for LabeledCorpus {
    fn from_iter<T: IntoIterator<Item = (Vec<String>, bool)>>(iter: T) -> Self {
        let (documents, labels) = iter.into_iter().unzip();
        Self { documents, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_objectives() {
        let target = [true, false, true];
        let mut hamming = |mask: &[bool]| -> Result<usize> {
            Ok(mask.iter().zip(&target).filter(|(a, b)| a != b).count())
        };
        assert_eq!(hamming.cost(&[true, true, true]).unwrap(), 1);
    }

    #[test]
    fn corpus_objective_counts_disagreements() {
        let mut model = ClassificationModel::with_conditions(
            vec![Condition::numeric_in_window(1)],
            Combinator::And,
        );
        let docs = vec![vec!["5"], vec!["five"], vec!["6"]];
        let labels = [true, true, false];
        let mut objective = CorpusObjective::new(&mut model, &docs, &labels).unwrap();
        assert_eq!(objective.dimension(), 1);
        assert_eq!(objective.cost(&[true]).unwrap(), 2);
        // No active condition: every document is negative.
        assert_eq!(objective.cost(&[false]).unwrap(), 2);
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let mut model = ClassificationModel::new();
        let docs: Vec<Vec<&str>> = vec![vec!["a"]];
        assert!(matches!(
            CorpusObjective::new(&mut model, &docs, &[true, false]),
            Err(CbtbcError::Validation { expected: 1, found: 2, .. })
        ));
        assert!(LabeledCorpus::new(vec![], vec![true]).is_err());
    }

    #[test]
    fn corpus_collects_pairs() {
        let corpus: LabeledCorpus = vec![(vec!["a".to_string()], true), (vec![], false)]
            .into_iter()
            .collect();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.positives(), 1);
    }

    #[test]
    fn pushed_documents_stay_aligned() {
        let mut corpus = LabeledCorpus::default();
        assert!(corpus.is_empty());
        corpus.push(vec!["late".to_string()], true);
        corpus.push(vec![], false);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.labels(), &[true, false]);
        assert_eq!(corpus.documents()[0], vec!["late".to_string()]);
    }
}
