//! Condition factory: kind name + parameter mapping → [`Condition`].
//!
//! Parameters arrive as a JSON-style mapping so that declarations can be
//! read from any serde format (TOML config, JSON corpora, code).

use crate::condition::Condition;
use crate::error::{CbtbcError, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Parameter mapping for one condition.
pub type Params = serde_json::Map<String, Value>;

/// The closed set of condition kinds the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    NumericInWindow,
    PercentInWindow,
    NumericOrPercentInWindow,
    KeywordInWindow,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::NumericInWindow,
        ConditionKind::PercentInWindow,
        ConditionKind::NumericOrPercentInWindow,
        ConditionKind::KeywordInWindow,
    ];

    /// Name used in declarations.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::NumericInWindow => "numeric-in-window",
            ConditionKind::PercentInWindow => "percent-in-window",
            ConditionKind::NumericOrPercentInWindow => "numeric-or-percent-in-window",
            ConditionKind::KeywordInWindow => "keyword-in-window",
        }
    }

    /// Parameters that must be present in the mapping.
    pub fn mandatory_params(&self) -> &'static [&'static str] {
        match self {
            ConditionKind::KeywordInWindow => &["n_words", "keywords"],
            _ => &["n_words"],
        }
    }

    /// Validate `params` and construct a fresh condition of this kind.
    pub fn build(&self, params: &Params) -> Result<Condition> {
        for name in self.mandatory_params() {
            if !params.contains_key(*name) {
                return Err(CbtbcError::missing_parameter(self.as_str(), *name));
            }
        }

        let n_words = self.n_words(params)?;
        let condition = match self {
            ConditionKind::NumericInWindow => Condition::numeric_in_window(n_words),
            ConditionKind::PercentInWindow => Condition::percent_in_window(n_words),
            ConditionKind::NumericOrPercentInWindow => {
                Condition::numeric_or_percent_in_window(n_words)
            }
            ConditionKind::KeywordInWindow => {
                Condition::keyword_in_window(n_words, self.keywords(params)?)
            }
        };
        Ok(condition)
    }

    fn n_words(&self, params: &Params) -> Result<usize> {
        let value = &params["n_words"];
        value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                CbtbcError::invalid_parameter(
                    self.as_str(),
                    "n_words",
                    format!("expected a non-negative integer, got {}", value),
                )
            })
    }

    fn keywords(&self, params: &Params) -> Result<BTreeSet<String>> {
        let invalid = |reason: String| CbtbcError::invalid_parameter(self.as_str(), "keywords", reason);

        let items = params["keywords"]
            .as_array()
            .ok_or_else(|| invalid(format!("expected a list of strings, got {}", params["keywords"])))?;

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(format!("keyword {} is not a string", item)))
            })
            .collect()
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKind {
    type Err = CbtbcError;

    fn from_str(s: &str) -> Result<Self> {
        ConditionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CbtbcError::unknown_condition(s))
    }
}

/// Build a condition from its kind name and parameters.
pub fn create_condition(kind: &str, params: &Params) -> Result<Condition> {
    kind.parse::<ConditionKind>()?.build(params)
}
