//! cbtbc Optimizer Prelude: convenient imports for common usage.
//!
//! ```rust
//! use cbtbc_optimizer::prelude::*;
//! ```

pub use crate::branch_bound::branch_and_bound;
pub use crate::config::{Pruning, SearchConfig, SearchMethod};
pub use crate::exhaustive::{exhaustive, MAX_EXHAUSTIVE_CONDITIONS};
pub use crate::objective::{CorpusObjective, LabeledCorpus, Objective};
pub use crate::random::{randomized, Restart};
pub use crate::score::{Incumbent, Score};
pub use crate::search::{search, search_with_rng, train, train_corpus, SearchOutcome};

// Re-export from model (which re-exports core)
pub use cbtbc_model::prelude::*;
