//! cbtbc Model Prelude: convenient imports for common usage.
//!
//! ```rust
//! use cbtbc_model::prelude::*;
//! ```

// Re-export the model
pub use crate::model::ClassificationModel;

// Re-export normalization
pub use crate::normalize::{Normalizer, TextNormalizer};

// Re-export persistence
pub use crate::persist::{
    from_json, load_model, load_snapshot, save_model, save_snapshot, to_json, ModelSnapshot,
    SnapshotMetadata,
};

// Re-export from core
pub use cbtbc_core::prelude::*;
