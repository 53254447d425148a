//! Model persistence: save/load the ordered condition list.
//!
//! Serializes the combinator and the conditions (kind + parameters, in
//! evaluation order) to JSON. Window state is transient and not saved:
//! a loaded model starts with every condition reset.

use crate::model::ClassificationModel;
use cbtbc_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Snapshot format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

/// Serializable snapshot of a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub combinator: Combinator,
    pub conditions: Vec<Condition>,
    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub model_id: String,
    pub format_version: u32,
    pub condition_count: usize,
    /// Training cost the snapshot was saved with, if it came from training.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_cost: Option<usize>,
}

impl ModelSnapshot {
    /// Capture a model's configuration.
    pub fn capture(model: &ClassificationModel) -> Self {
        Self {
            combinator: model.combinator(),
            conditions: model.conditions().to_vec(),
            metadata: SnapshotMetadata {
                model_id: uuid::Uuid::new_v4().to_string(),
                format_version: FORMAT_VERSION,
                condition_count: model.len(),
                training_cost: None,
            },
        }
    }

    pub fn with_training_cost(mut self, cost: usize) -> Self {
        self.metadata.training_cost = Some(cost);
        self
    }

    /// Rebuild a model. Fails if the recorded count disagrees with the list.
    pub fn restore(self) -> Result<ClassificationModel> {
        if self.metadata.condition_count != self.conditions.len() {
            return Err(CbtbcError::length_mismatch(
                "snapshot conditions",
                self.metadata.condition_count,
                self.conditions.len(),
            ));
        }
        let mut conditions = self.conditions;
        for cond in &mut conditions {
            cond.reset();
        }
        Ok(ClassificationModel::with_conditions(conditions, self.combinator))
    }
}

/// Serialize a model to a JSON blob.
pub fn to_json(model: &ClassificationModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ModelSnapshot::capture(model))?)
}

/// Restore a model from a JSON blob produced by [`to_json`].
pub fn from_json(json: &str) -> Result<ClassificationModel> {
    let snapshot: ModelSnapshot = serde_json::from_str(json)?;
    snapshot.restore()
}

/// Write a snapshot to a JSON file, creating parent directories.
pub fn save_snapshot(snapshot: &ModelSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    debug!(
        path = %path.display(),
        conditions = snapshot.conditions.len(),
        "Saved model snapshot"
    );
    Ok(())
}

/// Save a model to a JSON file.
pub fn save_model(model: &ClassificationModel, path: &Path) -> Result<()> {
    save_snapshot(&ModelSnapshot::capture(model), path)
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<ModelSnapshot> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Load a model from a JSON file.
pub fn load_model(path: &Path) -> Result<ClassificationModel> {
    load_snapshot(path)?.restore()
}
