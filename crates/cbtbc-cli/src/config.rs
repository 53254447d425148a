//! Configuration management for the cbtbc CLI.

use anyhow::{Context, Result};
use cbtbc::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};

/// cbtbc project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub normalizer: TextNormalizer,
    #[serde(default)]
    pub model: ModelConfig,
}

/// Candidate conditions, declared as for
/// [`ClassificationModel::from_declaration`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_declaration")]
    pub declaration: Vec<String>,
    #[serde(default = "default_params")]
    pub params: Vec<Params>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_n_iter")]
    pub n_iter: usize,
    #[serde(default = "default_true_probability")]
    pub true_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Prune branch-and-bound subtrees with the all-true estimate.
    #[serde(default = "default_prune")]
    pub prune: bool,
}

// Default value functions
fn default_declaration() -> Vec<String> {
    vec![
        "numeric-or-percent-in-window".to_string(),
        "keyword-in-window".to_string(),
        "and".to_string(),
    ]
}
fn default_params() -> Vec<Params> {
    [
        json!({"n_words": 3}),
        json!({"n_words": 3, "keywords": ["rates"]}),
    ]
    .into_iter()
    .filter_map(|v| v.as_object().cloned())
    .collect()
}
fn default_method() -> String { SearchMethod::Exhaustive.to_string() }
fn default_n_iter() -> usize { 100 }
fn default_true_probability() -> f64 { 0.5 }
fn default_prune() -> bool { true }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            declaration: default_declaration(),
            params: default_params(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            n_iter: default_n_iter(),
            true_probability: default_true_probability(),
            seed: None,
            prune: default_prune(),
        }
    }
}

impl ModelConfig {
    pub fn build(&self) -> Result<ClassificationModel> {
        ClassificationModel::from_declaration(&self.declaration, &self.params)
            .context("Invalid [model] declaration")
    }
}

impl TrainingConfig {
    pub fn search_config(&self) -> Result<SearchConfig> {
        let method: SearchMethod = self
            .method
            .parse()
            .with_context(|| format!("Invalid [training] method: {}", self.method))?;
        let pruning = if self.prune {
            Pruning::AllTrueBound
        } else {
            Pruning::Disabled
        };
        let mut config = SearchConfig::new(method)
            .with_n_iter(self.n_iter)
            .with_true_probability(self.true_probability)
            .with_pruning(pruning);
        config.seed = self.seed;
        Ok(config)
    }
}

impl Config {
    /// Load config from cbtbc.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find cbtbc.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("cbtbc.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Get the cbtbc data directory (.cbtbc/).
pub fn data_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(".cbtbc"))
}

/// The model path used when none is given.
pub fn default_model_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("model.json"))
}

/// Resolve an optional model argument.
pub fn model_path(arg: Option<&str>) -> Result<PathBuf> {
    match arg {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_model_path(),
    }
}
