//! Distance-since-last-match state shared by every windowed condition.
//!
//! A window remembers only how many words ago the last qualifying word was
//! seen, so memory per condition is constant regardless of document length.

use serde::{Deserialize, Serialize};

/// Sliding "did it happen recently" window over a word stream.
///
/// The distance is undefined until the first qualifying word. It then grows
/// by one per non-qualifying word and drops back to zero on every
/// qualifying word. The window is open while the distance is defined and
/// strictly below `n_words`.
///
/// Only `n_words` is serialized; a restored window starts reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    n_words: usize,
    #[serde(skip)]
    last_distance: Option<usize>,
}

impl Window {
    pub fn new(n_words: usize) -> Self {
        Self {
            n_words,
            last_distance: None,
        }
    }

    /// Window length in words.
    pub fn n_words(&self) -> usize {
        self.n_words
    }

    /// Words since the last qualifying word, if one has been seen.
    pub fn last_distance(&self) -> Option<usize> {
        self.last_distance
    }

    /// Advance the window by one word and report whether it is open.
    pub fn observe(&mut self, qualifies: bool) -> bool {
        if qualifies {
            self.last_distance = Some(0);
        } else if let Some(distance) = self.last_distance.as_mut() {
            *distance = distance.saturating_add(1);
        }
        self.is_open()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.last_distance, Some(d) if d < self.n_words)
    }

    /// Forget every word seen so far.
    pub fn reset(&mut self) {
        self.last_distance = None;
    }
}

// Equality is over configuration only; transient state is ignored.
impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        self.n_words == other.n_words
    }
}

impl Eq for Window {}
