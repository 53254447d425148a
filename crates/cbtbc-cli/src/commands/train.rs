//! Train a model against a labeled corpus.

use anyhow::{bail, Context, Result};
use cbtbc::prelude::*;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{default_model_path, Config};

/// Command-line values that take precedence over `[training]`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub method: Option<String>,
    pub n_iter: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Record {
    text: String,
    label: bool,
}

/// Read a JSON array of `{text, label}` records and normalize each text.
pub fn load_corpus<N: Normalizer + ?Sized>(path: &Path, normalizer: &N) -> Result<LabeledCorpus> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;
    Ok(records
        .into_iter()
        .map(|r| (normalizer.normalize(&r.text), r.label))
        .collect())
}

pub fn run(corpus: &str, output: Option<&str>, overrides: Overrides) -> Result<()> {
    let corpus_path = Path::new(corpus);
    if !corpus_path.exists() {
        bail!("Corpus does not exist: {}", corpus_path.display());
    }

    let mut config = Config::load()?;
    if let Some(method) = overrides.method {
        config.training.method = method;
    }
    if let Some(n_iter) = overrides.n_iter {
        config.training.n_iter = n_iter;
    }
    if overrides.seed.is_some() {
        config.training.seed = overrides.seed;
    }
    let search = config.training.search_config()?;
    let mut model = config.model.build()?;

    let corpus = load_corpus(corpus_path, &config.normalizer)?;
    if corpus.is_empty() {
        bail!("Corpus is empty: {}", corpus_path.display());
    }
    println!(
        "{} Loaded {} documents ({} positive)",
        "→".blue(),
        corpus.len().to_string().cyan(),
        corpus.positives().to_string().cyan()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(format!(
        "Searching {} condition subsets ({})",
        model.len(),
        search.method
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = train_corpus(&mut model, &corpus, &search);
    pb.finish_and_clear();
    let outcome = outcome.context("Training failed")?;

    outcome.apply(&mut model)?;
    let output_path = match output {
        Some(p) => PathBuf::from(p),
        None => default_model_path()?,
    };
    let snapshot = ModelSnapshot::capture(&model).with_training_cost(outcome.cost);
    save_snapshot(&snapshot, &output_path)?;

    println!();
    println!("{} Training complete!", "✓".green().bold());
    println!(
        "  Misclassified: {} / {}",
        outcome.cost.to_string().cyan(),
        corpus.len()
    );
    println!("  Evaluations:   {}", outcome.evaluations.to_string().cyan());
    println!("  Mask:          {}", mask_to_string(&outcome.mask).cyan());
    println!("  Kept conditions ({}):", model.len());
    for condition in model.conditions() {
        println!("    {} {}", "•".blue(), condition);
    }
    println!("  Saved to {}", output_path.display().to_string().cyan());

    Ok(())
}
