//! Shared types: the top-level combinator and condition masks.

use crate::error::{CbtbcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level boolean reduction over the active conditions' per-word results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every active condition holds at the same word.
    #[default]
    And,
    /// At least one active condition holds.
    Or,
}

impl Combinator {
    /// Recognise a combinator keyword in a declaration (case-sensitive).
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Combinator::And),
            "or" => Some(Combinator::Or),
            _ => None,
        }
    }

    /// Reduce one word's results. Nothing active never holds, under
    /// either combinator, so an emptied model and an all-false mask agree.
    pub fn combine(&self, results: &[bool]) -> bool {
        match self {
            Combinator::And => !results.is_empty() && results.iter().all(|&r| r),
            Combinator::Or => results.iter().any(|&r| r),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = CbtbcError;

    fn from_str(s: &str) -> Result<Self> {
        Combinator::from_keyword(s)
            .ok_or_else(|| CbtbcError::invalid_declaration(format!("unknown combinator '{}'", s)))
    }
}

/// Number of active (`true`) entries in a mask.
pub fn popcount(mask: &[bool]) -> usize {
    mask.iter().filter(|&&b| b).count()
}

/// Fail unless `mask` addresses exactly `expected` conditions.
pub fn ensure_mask_len(mask: &[bool], expected: usize) -> Result<()> {
    if mask.len() != expected {
        return Err(CbtbcError::length_mismatch("mask", expected, mask.len()));
    }
    Ok(())
}

/// Render a mask as a compact bit string, e.g. `10110`.
pub fn mask_to_string(mask: &[bool]) -> String {
    mask.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
