//! # cbtbc Core
//!
//! Conditions and shared types for conditions-based text binary classification.
//!
//! A document is classified by streaming its words, one at a time, through a
//! small set of stateful conditions. Every condition answers a single
//! question: "did a qualifying word occur within the last `n_words` words?"
//!
//! - **NumericInWindow** - a word parsing as a real number
//! - **PercentInWindow** - a number followed by `%`
//! - **NumericOrPercentInWindow** - either of the above
//! - **KeywordInWindow** - a member of a fixed keyword set
//! - **Negation** - inverts a wrapped condition
//!
//! ## Quick Start
//!
//! ```rust
//! use cbtbc_core::prelude::*;
//!
//! let mut cond = Condition::numeric_in_window(2);
//! assert!(cond.check("100.5"));
//! assert!(cond.check("apples"));
//! assert!(!cond.check("oranges"));
//!
//! cond.reset();
//! assert!(!cond.check("apples"));
//! ```

pub mod condition;
pub mod error;
pub mod factory;
pub mod lexical;
pub mod prelude;
pub mod types;
pub mod window;
