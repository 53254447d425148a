//! # cbtbc Optimizer
//!
//! Chooses which of a model's conditions to keep.
//!
//! Every subset of the k conditions is a boolean mask. A mask costs the
//! number of training documents the masked model misclassifies; among equal
//! costs, fewer active conditions win. Four strategies explore the masks:
//!
//! | Method | Behavior |
//! |--------|----------|
//! | `exhaustive` | Every mask, in ascending integer order |
//! | `branch-and-bound` | One depth-first search from the all-false mask |
//! | `randomized` | Distinct random masks, each evaluated once |
//! | `hybrid` | Branch-and-bound seeded from distinct random masks |
//!
//! ```rust
//! use cbtbc_optimizer::prelude::*;
//!
//! let mut model = ClassificationModel::with_conditions(
//!     vec![
//!         Condition::keyword_in_window(2, ["rates"]),
//!         Condition::keyword_in_window(2, ["price"]),
//!     ],
//!     Combinator::And,
//! );
//! let documents = vec![vec!["low", "rates"], vec!["low", "price"]];
//! let labels = [true, false];
//!
//! let outcome = train(
//!     &mut model,
//!     &documents,
//!     &labels,
//!     &SearchConfig::new(SearchMethod::Exhaustive),
//! )
//! .unwrap();
//! assert_eq!(outcome.cost, 0);
//! assert_eq!(outcome.mask, vec![true, false]);
//!
//! outcome.apply(&mut model).unwrap();
//! assert_eq!(model.len(), 1);
//! ```

pub mod branch_bound;
pub mod config;
pub mod exhaustive;
pub mod objective;
pub mod prelude;
pub mod random;
pub mod score;
pub mod search;
