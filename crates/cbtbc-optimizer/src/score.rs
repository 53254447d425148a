//! Ordering of candidate masks and best-so-far tracking.

use cbtbc_core::types::popcount;
use std::cmp::Ordering;

/// How good a mask is: fewer misclassifications first, then fewer
/// active conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub cost: usize,
    pub popcount: usize,
}

impl Score {
    pub fn of(cost: usize, mask: &[bool]) -> Self {
        Self {
            cost,
            popcount: popcount(mask),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.popcount.cmp(&other.popcount))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best mask seen so far. Only strictly better scores replace it, so among
/// equal scores the first one offered is kept.
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    best: Option<(Score, Vec<bool>)>,
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mask` if it beats the incumbent. Returns whether it did.
    pub fn offer(&mut self, mask: &[bool], cost: usize) -> bool {
        let score = Score::of(cost, mask);
        match &mut self.best {
            Some((best, best_mask)) if score < *best => {
                *best = score;
                best_mask.clear();
                best_mask.extend_from_slice(mask);
                true
            }
            Some(_) => false,
            None => {
                self.best = Some((score, mask.to_vec()));
                true
            }
        }
    }

    /// Adopt another incumbent's best if it is strictly better.
    pub fn merge(&mut self, other: &Incumbent) -> bool {
        match &other.best {
            Some((score, mask)) => self.offer(mask, score.cost),
            None => false,
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.best.as_ref().map(|(s, _)| *s)
    }

    pub fn cost(&self) -> Option<usize> {
        self.score().map(|s| s.cost)
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.best.as_ref().map(|(_, m)| m.as_slice())
    }

    pub fn into_parts(self) -> Option<(usize, Vec<bool>)> {
        self.best.map(|(s, m)| (s.cost, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_dominates_popcount() {
        let cheap_but_big = Score { cost: 1, popcount: 5 };
        let costly_but_small = Score { cost: 2, popcount: 0 };
        assert!(cheap_but_big < costly_but_small);
        assert!(Score { cost: 1, popcount: 1 } < cheap_but_big);
    }

    #[test]
    fn incumbent_keeps_first_of_equal_scores() {
        let mut inc = Incumbent::new();
        assert!(inc.offer(&[true, false], 3));
        assert!(!inc.offer(&[false, true], 3));
        assert_eq!(inc.mask(), Some(&[true, false][..]));
        assert!(inc.offer(&[false, false], 3));
        assert!(inc.offer(&[true, true], 2));
        assert_eq!(inc.into_parts(), Some((2, vec![true, true])));
    }

    #[test]
    fn merge_adopts_only_better() {
        let mut a = Incumbent::new();
        a.offer(&[true], 1);
        let mut b = Incumbent::new();
        b.offer(&[false], 1);
        assert!(a.merge(&b));
        assert_eq!(a.mask(), Some(&[false][..]));
        assert!(!a.merge(&Incumbent::new()));
    }
}
