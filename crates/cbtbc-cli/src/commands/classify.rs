//! Classify documents with a trained model.

use anyhow::{bail, Context, Result};
use cbtbc::prelude::*;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::config::{model_path, Config};

fn verdict(positive: bool) -> colored::ColoredString {
    if positive {
        "positive".green().bold()
    } else {
        "negative".red()
    }
}

pub fn run(files: &[String], text: Option<&str>, model: Option<&str>, verbose: bool) -> Result<()> {
    let path = model_path(model)?;
    if !path.exists() {
        bail!(
            "No model found at {}. Run {} first.",
            path.display(),
            "cbtbc train".cyan()
        );
    }
    let mut model = load_model(&path)
        .with_context(|| format!("Failed to load model: {}", path.display()))?;
    let normalizer = Config::load()?.normalizer;

    if let Some(text) = text {
        println!("{}", verdict(model.classify(&normalizer, text)));
        return Ok(());
    }
    if files.is_empty() {
        bail!("Nothing to classify: pass files or --text");
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let content = std::fs::read_to_string(Path::new(file))
            .with_context(|| format!("Failed to read: {}", file))?;
        if verbose {
            pb.set_message(file.clone());
        }
        results.push((file, model.classify(&normalizer, &content)));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let positives = results.iter().filter(|(_, p)| *p).count();
    for (file, positive) in &results {
        println!("  {} {}", verdict(*positive), file);
    }
    println!();
    println!(
        "{} {} of {} documents positive",
        "✓".green().bold(),
        positives.to_string().cyan(),
        results.len()
    );

    Ok(())
}
