//! Depth-first branch-and-bound over condition masks.

use crate::config::Pruning;
use crate::objective::Objective;
use crate::score::Incumbent;
use cbtbc_core::prelude::*;
use tracing::{debug, trace};

struct BranchAndBound<'o, O: ?Sized> {
    objective: &'o mut O,
    pruning: Pruning,
    best: Incumbent,
    /// Prefix completed with all-true bits, reused across bound checks.
    completion: Vec<bool>,
    pruned: usize,
}

impl<O: Objective + ?Sized> BranchAndBound<'_, O> {
    fn descend(&mut self, vector: &mut [bool], seed: &[bool], index: usize) -> Result<()> {
        let dimension = vector.len();
        if index == dimension {
            let cost = self.objective.cost(vector)?;
            if self.best.offer(vector, cost) {
                trace!(cost, "Branch-and-bound leaf improved");
            }
            return Ok(());
        }

        if index > 0 && self.pruning == Pruning::AllTrueBound {
            if let Some(best_cost) = self.best.cost() {
                self.completion.clear();
                self.completion.extend_from_slice(&vector[..index]);
                self.completion.resize(dimension, true);
                let bound = self.objective.cost(&self.completion)?;
                if bound > best_cost {
                    self.pruned += 1;
                    trace!(index, bound, best_cost, "Pruned subtree");
                    return Ok(());
                }
            }
        }

        let first = seed[index];
        for bit in [first, !first] {
            vector[index] = bit;
            self.descend(vector, seed, index + 1)?;
        }
        vector[index] = false;
        Ok(())
    }
}

/// Search all masks of `seed.len()` bits, visiting the seed's branch first
/// at every level so the seed itself is the first leaf evaluated.
pub fn branch_and_bound<O: Objective + ?Sized>(
    objective: &mut O,
    seed: &[bool],
    pruning: Pruning,
) -> Result<Incumbent> {
    let mut search = BranchAndBound {
        objective,
        pruning,
        best: Incumbent::new(),
        completion: Vec::with_capacity(seed.len()),
        pruned: 0,
    };
    let mut vector = vec![false; seed.len()];
    search.descend(&mut vector, seed, 0)?;

    debug!(
        cost = ?search.best.cost(),
        pruned = search.pruned,
        "Branch-and-bound finished"
    );
    Ok(search.best)
}
