//! # cbtbc
//!
//! Conditions-based binary text classification.
//!
//! A model is an ordered list of windowed word conditions combined with a
//! single AND or OR. Each condition watches a stream of words and remembers
//! how many words ago its qualifying event last happened; it holds while
//! that distance is below its window size. A document is positive as soon
//! as the combined conditions hold at some word.
//!
//! Training does not learn weights. It chooses which candidate conditions
//! to keep, minimizing misclassified training documents and then the number
//! of kept conditions.
//!
//! ## Quick Start
//!
//! ```rust
//! use cbtbc::prelude::*;
//! use serde_json::json;
//!
//! let declaration = ["numeric-or-percent-in-window", "keyword-in-window", "and"];
//! let params = [
//!     json!({"n_words": 3}).as_object().cloned().unwrap(),
//!     json!({"n_words": 3, "keywords": ["rates"]}).as_object().cloned().unwrap(),
//! ];
//! let mut model = ClassificationModel::from_declaration(&declaration, &params).unwrap();
//!
//! assert!(model.run(&["special", "rates", "is", "100.00%"]));
//! assert!(!model.run(&["special", "price", "is", "100.00%"]));
//!
//! // Keep only the conditions that separate the training labels.
//! let documents = vec![
//!     vec!["special", "rates", "is", "100.00%"],
//!     vec!["special", "price", "is", "100.00%"],
//! ];
//! let outcome = train(
//!     &mut model,
//!     &documents,
//!     &[true, false],
//!     &SearchConfig::new(SearchMethod::Exhaustive),
//! )
//! .unwrap();
//! assert_eq!(outcome.cost, 0);
//! assert_eq!(outcome.mask, vec![false, true]);
//! ```
//!
//! ## Architecture
//!
//! - [`cbtbc_core`] - Conditions, windows, the condition factory and errors
//! - [`cbtbc_model`] - The model, text normalization and persistence
//! - [`cbtbc_optimizer`] - Mask search strategies and `train`
//!
//! ## Conditions
//!
//! | Kind | Qualifying word |
//! |------|-----------------|
//! | `numeric-in-window` | parses as a float |
//! | `percent-in-window` | a float followed by `%` |
//! | `numeric-or-percent-in-window` | either of the above |
//! | `keyword-in-window` | one of the configured keywords |
//!
//! Any condition can be wrapped with [`Condition::negate`](cbtbc_core::condition::Condition::negate).

pub use cbtbc_core as core;
pub use cbtbc_model as model;
pub use cbtbc_optimizer as optimizer;

/// Prelude module for convenient imports.
///
/// ```rust
/// use cbtbc::prelude::*;
/// ```
pub mod prelude {
    pub use cbtbc_optimizer::prelude::*;
}
