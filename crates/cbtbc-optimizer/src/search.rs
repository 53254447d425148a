//! Search dispatch and the training entry point.

use crate::branch_bound::branch_and_bound;
use crate::config::{SearchConfig, SearchMethod};
use crate::exhaustive::exhaustive;
use crate::objective::{CorpusObjective, LabeledCorpus, Objective};
use crate::random::{randomized, Restart};
use crate::score::Incumbent;
use cbtbc_core::prelude::*;
use cbtbc_model::model::ClassificationModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Best mask found by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Misclassified documents under `mask`.
    pub cost: usize,
    pub mask: Vec<bool>,
    /// Objective calls made, bound checks included.
    pub evaluations: usize,
}

impl SearchOutcome {
    pub fn popcount(&self) -> usize {
        popcount(&self.mask)
    }

    /// Keep only the conditions the mask selects.
    pub fn apply(&self, model: &mut ClassificationModel) -> Result<()> {
        model.filter(&self.mask)
    }
}

struct Counted<'o, O: ?Sized> {
    inner: &'o mut O,
    calls: usize,
}

impl<O: Objective + ?Sized> Objective for Counted<'_, O> {
    fn cost(&mut self, mask: &[bool]) -> Result<usize> {
        self.calls += 1;
        self.inner.cost(mask)
    }
}

/// Build the random source a config asks for: seeded when `seed` is set.
pub fn rng_for(config: &SearchConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Minimize `objective` over masks of `dimension` bits.
pub fn search<O: Objective + ?Sized>(
    dimension: usize,
    objective: &mut O,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let mut rng = rng_for(config);
    search_with_rng(dimension, objective, config, &mut rng)
}

/// Like [`search`], drawing random masks from `rng`.
pub fn search_with_rng<O, R>(
    dimension: usize,
    objective: &mut O,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchOutcome>
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut counted = Counted {
        inner: objective,
        calls: 0,
    };

    let best: Incumbent = match config.method {
        SearchMethod::Exhaustive => exhaustive(dimension, &mut counted)?,
        SearchMethod::BranchAndBound => {
            branch_and_bound(&mut counted, &vec![false; dimension], config.pruning)?
        }
        SearchMethod::Randomized => randomized(
            dimension,
            &mut counted,
            config.n_iter,
            config.true_probability,
            Restart::Evaluate,
            rng,
        )?,
        SearchMethod::Hybrid => randomized(
            dimension,
            &mut counted,
            config.n_iter,
            config.true_probability,
            Restart::Refine(config.pruning),
            rng,
        )?,
    };

    let (cost, mask) = best.into_parts().ok_or_else(|| {
        CbtbcError::invalid_parameter("search", "n_iter", "no mask was evaluated")
    })?;
    let outcome = SearchOutcome {
        cost,
        mask,
        evaluations: counted.calls,
    };

    info!(
        method = %config.method,
        cost = outcome.cost,
        active = outcome.popcount(),
        evaluations = outcome.evaluations,
        "Search complete"
    );
    Ok(outcome)
}

/// Find the condition mask that best separates `documents` by `labels`.
///
/// The model's conditions are left in place; call [`SearchOutcome::apply`]
/// to drop the unselected ones.
pub fn train<S: AsRef<str>>(
    model: &mut ClassificationModel,
    documents: &[Vec<S>],
    labels: &[bool],
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let mut objective = CorpusObjective::new(model, documents, labels)?;
    let dimension = objective.dimension();
    search(dimension, &mut objective, config)
}

/// [`train`] over an owned corpus.
pub fn train_corpus(
    model: &mut ClassificationModel,
    corpus: &LabeledCorpus,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    train(model, corpus.documents(), corpus.labels(), config)
}
