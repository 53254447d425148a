//! # cbtbc Model
//!
//! The classification model, its normalization seam and its persistence.
//!
//! A [`ClassificationModel`](model::ClassificationModel) owns an ordered list
//! of conditions and a top-level combinator. Classifying a document resets
//! every condition, then streams the words through the active conditions
//! until the combinator is satisfied at some word.
//!
//! ```rust
//! use cbtbc_model::prelude::*;
//!
//! let mut model = ClassificationModel::with_conditions(
//!     vec![
//!         Condition::numeric_or_percent_in_window(3),
//!         Condition::keyword_in_window(3, ["rates"]),
//!     ],
//!     Combinator::And,
//! );
//!
//! assert!(model.run(&["special", "rates", "is", "100.00%"]));
//! assert!(!model.run(&["special", "price", "is", "100.00%"]));
//! ```

pub mod model;
pub mod normalize;
pub mod persist;
pub mod prelude;
