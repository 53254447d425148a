//! Stateful word conditions.
//!
//! Conditions form a closed set: four windowed kinds plus a negation
//! wrapper. Each one is fed a document word by word through
//! [`Condition::check`] and must be [`Condition::reset`] before the next
//! document, otherwise distance state leaks across documents.

use crate::lexical::{is_float, is_percent};
use crate::window::Window;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A stateful boolean test applied to one word at a time.
///
/// Serializes as a kind-tagged record holding only its parameters, so a
/// saved condition restores in the reset state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Condition {
    /// A real number occurred within the window.
    NumericInWindow { window: Window },
    /// A percentage (`<number>%`) occurred within the window.
    PercentInWindow { window: Window },
    /// A number or a percentage occurred within the window.
    NumericOrPercentInWindow { window: Window },
    /// One of the keywords occurred within the window.
    KeywordInWindow {
        window: Window,
        keywords: BTreeSet<String>,
    },
    /// Logical NOT of the wrapped condition.
    Negation { inner: Box<Condition> },
}

impl Condition {
    pub fn numeric_in_window(n_words: usize) -> Self {
        Condition::NumericInWindow {
            window: Window::new(n_words),
        }
    }

    pub fn percent_in_window(n_words: usize) -> Self {
        Condition::PercentInWindow {
            window: Window::new(n_words),
        }
    }

    pub fn numeric_or_percent_in_window(n_words: usize) -> Self {
        Condition::NumericOrPercentInWindow {
            window: Window::new(n_words),
        }
    }

    pub fn keyword_in_window<I, S>(n_words: usize, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::KeywordInWindow {
            window: Window::new(n_words),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Wrap this condition so that it reports the opposite result.
    pub fn negate(self) -> Self {
        Condition::Negation {
            inner: Box::new(self),
        }
    }

    /// Feed the next word and report whether the condition currently holds.
    pub fn check(&mut self, word: &str) -> bool {
        match self {
            Condition::NumericInWindow { window } => window.observe(is_float(word)),
            Condition::PercentInWindow { window } => window.observe(is_percent(word)),
            Condition::NumericOrPercentInWindow { window } => {
                window.observe(is_float(word) || is_percent(word))
            }
            Condition::KeywordInWindow { window, keywords } => {
                window.observe(keywords.contains(word))
            }
            Condition::Negation { inner } => !inner.check(word),
        }
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        match self {
            Condition::NumericInWindow { window }
            | Condition::PercentInWindow { window }
            | Condition::NumericOrPercentInWindow { window }
            | Condition::KeywordInWindow { window, .. } => window.reset(),
            Condition::Negation { inner } => inner.reset(),
        }
    }

    /// The window backing this condition (the wrapped one for negations).
    pub fn window(&self) -> &Window {
        match self {
            Condition::NumericInWindow { window }
            | Condition::PercentInWindow { window }
            | Condition::NumericOrPercentInWindow { window }
            | Condition::KeywordInWindow { window, .. } => window,
            Condition::Negation { inner } => inner.window(),
        }
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Condition::Negation { .. })
    }

    /// Human-readable kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Condition::NumericInWindow { .. } => "NumericInWindow",
            Condition::PercentInWindow { .. } => "PercentInWindow",
            Condition::NumericOrPercentInWindow { .. } => "NumericOrPercentInWindow",
            Condition::KeywordInWindow { .. } => "KeywordInWindow",
            Condition::Negation { .. } => "Negation",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::KeywordInWindow { window, keywords } => {
                let joined: Vec<&str> = keywords.iter().map(String::as_str).collect();
                write!(
                    f,
                    "{}(n_words={}, keywords=[{}])",
                    self.name(),
                    window.n_words(),
                    joined.join(", ")
                )
            }
            Condition::Negation { inner } => write!(f, "{}({})", self.name(), inner),
            _ => write!(f, "{}(n_words={})", self.name(), self.window().n_words()),
        }
    }
}
