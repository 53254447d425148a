//! Randomized restarts, optionally refined by branch-and-bound.

use crate::branch_bound::branch_and_bound;
use crate::config::Pruning;
use crate::objective::Objective;
use crate::score::Incumbent;
use cbtbc_core::prelude::*;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Consecutive duplicate draws tolerated before sampling gives up.
pub const MAX_REJECTED_DRAWS: usize = 10_000;

/// What each restart does with its random mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restart {
    /// Score the mask as drawn.
    Evaluate,
    /// Use the mask as the seed of a branch-and-bound search.
    Refine(Pruning),
}

/// Draw a mask whose bits are independently on with probability `p`.
pub fn sample_mask<R: Rng + ?Sized>(dimension: usize, p: f64, rng: &mut R) -> Vec<bool> {
    (0..dimension).map(|_| rng.gen_bool(p)).collect()
}

/// Masks reachable when every bit is drawn with probability `p`, or `None`
/// when the count does not fit in a `u64`.
fn reachable_masks(dimension: usize, p: f64) -> Option<u64> {
    if p <= 0.0 || p >= 1.0 {
        Some(1)
    } else if dimension < 64 {
        Some(1u64 << dimension)
    } else {
        None
    }
}

/// Run up to `n_iter` restarts from distinct random masks.
///
/// Stops early once every reachable mask has been drawn. The best result of
/// each restart is also marked as seen, so it is never drawn as a seed.
pub fn randomized<O, R>(
    dimension: usize,
    objective: &mut O,
    n_iter: usize,
    true_probability: f64,
    restart: Restart,
    rng: &mut R,
) -> Result<Incumbent>
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let reachable = reachable_masks(dimension, true_probability);
    let mut seen: HashSet<Vec<bool>> = HashSet::new();
    let mut best = Incumbent::new();

    'restarts: for iteration in 0..n_iter {
        if reachable.is_some_and(|r| seen.len() as u64 >= r) {
            debug!(iteration, "Every reachable mask has been tried");
            break;
        }

        let mut rejected = 0;
        let start = loop {
            let candidate = sample_mask(dimension, true_probability, rng);
            if !seen.contains(&candidate) {
                break candidate;
            }
            rejected += 1;
            if rejected >= MAX_REJECTED_DRAWS {
                debug!(iteration, rejected, "No unseen mask drawn, stopping early");
                break 'restarts;
            }
        };
        seen.insert(start.clone());

        let found = match restart {
            Restart::Evaluate => {
                let mut single = Incumbent::new();
                single.offer(&start, objective.cost(&start)?);
                single
            }
            Restart::Refine(pruning) => branch_and_bound(objective, &start, pruning)?,
        };

        if best.merge(&found) {
            debug!(iteration, cost = ?best.cost(), "Restart improved best mask");
        }
        if let Some(mask) = found.mask() {
            seen.insert(mask.to_vec());
        }
    }

    Ok(best)
}
