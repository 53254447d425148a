//! Show a saved model.

use anyhow::{bail, Context, Result};
use cbtbc::prelude::*;
use colored::Colorize;

use crate::config::model_path;

pub fn run(model: Option<&str>) -> Result<()> {
    let path = model_path(model)?;
    if !path.exists() {
        bail!("No model found at {}", path.display());
    }
    let snapshot = load_snapshot(&path)
        .with_context(|| format!("Failed to load model: {}", path.display()))?;

    println!("{}", "cbtbc Model".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Id:             {}", snapshot.metadata.model_id.cyan());
    println!("  Format version: {}", snapshot.metadata.format_version);
    println!("  Combinator:     {}", snapshot.combinator.to_string().cyan());
    match snapshot.metadata.training_cost {
        Some(cost) => println!("  Training cost:  {}", cost.to_string().cyan()),
        None => println!("  Training cost:  {}", "untrained".dimmed()),
    }
    println!();

    println!("{}", "Conditions".blue().bold());
    if snapshot.conditions.is_empty() {
        println!("  {} none (every document is negative)", "•".yellow());
    }
    for (i, condition) in snapshot.conditions.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, condition);
    }
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
