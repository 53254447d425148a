//! Exhaustive enumeration of every condition mask.

use crate::objective::Objective;
use crate::score::Incumbent;
use cbtbc_core::prelude::*;
use tracing::debug;

/// Widest mask exhaustive search will enumerate.
pub const MAX_EXHAUSTIVE_CONDITIONS: usize = 63;

/// Fill `mask` from the binary representation of `index`, most
/// significant bit first.
pub fn mask_from_index(index: u64, mask: &mut [bool]) {
    let width = mask.len();
    for (position, bit) in mask.iter_mut().enumerate() {
        *bit = (index >> (width - 1 - position)) & 1 == 1;
    }
}

/// Evaluate all 2^`dimension` masks in ascending integer order and keep the
/// lowest cost, breaking ties by fewest active conditions and then by order.
pub fn exhaustive<O: Objective + ?Sized>(dimension: usize, objective: &mut O) -> Result<Incumbent> {
    if dimension > MAX_EXHAUSTIVE_CONDITIONS {
        return Err(CbtbcError::SearchSpaceTooLarge {
            conditions: dimension,
            limit: MAX_EXHAUSTIVE_CONDITIONS,
        });
    }

    let total = 1u64 << dimension;
    let mut mask = vec![false; dimension];
    let mut best = Incumbent::new();

    for index in 0..total {
        mask_from_index(index, &mut mask);
        let cost = objective.cost(&mask)?;
        if best.offer(&mask, cost) {
            debug!(index, cost, "Exhaustive search improved");
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bits_are_most_significant_first() {
        let mut mask = vec![false; 3];
        mask_from_index(0b110, &mut mask);
        assert_eq!(mask, vec![true, true, false]);
        mask_from_index(1, &mut mask);
        assert_eq!(mask, vec![false, false, true]);
    }

    #[test]
    fn visits_every_mask_once() {
        let mut seen = Vec::new();
        let mut record = |mask: &[bool]| -> Result<usize> {
            seen.push(mask.to_vec());
            Ok(1)
        };
        exhaustive(3, &mut record).unwrap();
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], vec![false, false, false]);
        assert_eq!(seen[7], vec![true, true, true]);
    }

    #[test]
    fn prefers_fewest_active_conditions_among_equal_costs() {
        // Cost 0 whenever the middle bit is on.
        let mut objective = |mask: &[bool]| -> Result<usize> { Ok(if mask[1] { 0 } else { 2 }) };
        let best = exhaustive(3, &mut objective).unwrap();
        assert_eq!(best.into_parts(), Some((0, vec![false, true, false])));
    }

    #[test]
    fn zero_conditions_evaluates_the_empty_mask() {
        let mut objective = |mask: &[bool]| -> Result<usize> { Ok(mask.len() + 4) };
        let best = exhaustive(0, &mut objective).unwrap();
        assert_eq!(best.into_parts(), Some((4, vec![])));
    }

    #[test]
    fn refuses_oversized_spaces() {
        let mut objective = |_: &[bool]| -> Result<usize> { Ok(0) };
        let err = exhaustive(64, &mut objective).unwrap_err();
        assert!(matches!(err, CbtbcError::SearchSpaceTooLarge { conditions: 64, .. }));
    }
}
