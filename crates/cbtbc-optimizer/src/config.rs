//! Search method selection and parameters.

use cbtbc_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to explore the 2^k condition masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMethod {
    /// Evaluate every mask.
    #[serde(alias = "bruteforce")]
    Exhaustive,
    /// Single depth-first search from the all-false mask.
    #[serde(alias = "bnb")]
    BranchAndBound,
    /// Evaluate distinct random masks.
    #[serde(alias = "random")]
    Randomized,
    /// Branch-and-bound seeded from distinct random masks.
    #[serde(alias = "random_bnb")]
    Hybrid,
}

impl SearchMethod {
    pub const ALL: [SearchMethod; 4] = [
        SearchMethod::Exhaustive,
        SearchMethod::BranchAndBound,
        SearchMethod::Randomized,
        SearchMethod::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::Exhaustive => "exhaustive",
            SearchMethod::BranchAndBound => "branch-and-bound",
            SearchMethod::Randomized => "randomized",
            SearchMethod::Hybrid => "hybrid",
        }
    }

    /// Whether the method draws random masks.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, SearchMethod::Randomized | SearchMethod::Hybrid)
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = CbtbcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exhaustive" | "bruteforce" => Ok(SearchMethod::Exhaustive),
            "branch-and-bound" | "bnb" => Ok(SearchMethod::BranchAndBound),
            "randomized" | "random" => Ok(SearchMethod::Randomized),
            "hybrid" | "random_bnb" => Ok(SearchMethod::Hybrid),
            other => Err(CbtbcError::unsupported_method(other)),
        }
    }
}

/// Subtree pruning rule for branch-and-bound.
///
/// `AllTrueBound` estimates a subtree by the cost of its prefix with every
/// remaining condition switched on. That estimate is not a true lower bound
/// for either combinator, so it may prune the optimum away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pruning {
    #[default]
    AllTrueBound,
    Disabled,
}

fn default_method() -> SearchMethod {
    SearchMethod::Exhaustive
}

fn default_n_iter() -> usize {
    100
}

fn default_true_probability() -> f64 {
    0.5
}

/// Parameters for a mask search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_method")]
    pub method: SearchMethod,
    /// Restarts for the stochastic methods.
    #[serde(default = "default_n_iter")]
    pub n_iter: usize,
    /// Chance that each bit of a random mask is on.
    #[serde(default = "default_true_probability")]
    pub true_probability: f64,
    /// Fixed seed for reproducible stochastic searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub pruning: Pruning,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            n_iter: default_n_iter(),
            true_probability: default_true_probability(),
            seed: None,
            pruning: Pruning::default(),
        }
    }
}

impl SearchConfig {
    pub fn new(method: SearchMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_n_iter(mut self, n_iter: usize) -> Self {
        self.n_iter = n_iter;
        self
    }

    pub fn with_true_probability(mut self, p: f64) -> Self {
        self.true_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Reject parameters the chosen method cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.method.is_stochastic() {
            return Ok(());
        }
        if self.n_iter == 0 {
            return Err(CbtbcError::invalid_parameter(
                "search",
                "n_iter",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.true_probability) {
            return Err(CbtbcError::invalid_parameter(
                "search",
                "true_probability",
                format!("{} is not within [0, 1]", self.true_probability),
            ));
        }
        Ok(())
    }
}
