//! cbtbc Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use cbtbc_core::prelude::*;
//! ```

// Re-export conditions
pub use crate::condition::Condition;
pub use crate::window::Window;

// Re-export factory
pub use crate::factory::{create_condition, ConditionKind, Params};

// Re-export lexical helpers
pub use crate::lexical::{is_float, is_percent};

// Re-export shared types
pub use crate::types::{ensure_mask_len, mask_to_string, popcount, Combinator};

// Re-export error types
pub use crate::error::{CbtbcError, ConfigError, Result};
