//! Initialize a new cbtbc project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Ignore rules written into the data directory.
const DATA_IGNORE: &str = "# snapshots written by `cbtbc train`\n*.json\n";

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    println!("{} Preparing {}", "→".blue(), base_path.display());
    let config = scaffold(&base_path)?;
    let candidates = config.model.build()?;

    println!();
    println!(
        "{} {} candidate condition(s), combined with {}",
        "✓".green().bold(),
        candidates.len(),
        candidates.combinator()
    );
    for condition in candidates.conditions() {
        println!("    {}", condition.to_string().dimmed());
    }
    println!();
    println!("Training selects a subset of these against labeled examples:");
    println!(
        "  {} list candidates under [model] and tune [training] in cbtbc.toml",
        "-".blue()
    );
    println!(
        "  {} label documents as [{{\"text\": ..., \"label\": true}}, ...]",
        "-".blue()
    );
    println!(
        "  {} run `cbtbc train <corpus.json>`, then `cbtbc classify --text \"...\"`",
        "-".blue()
    );

    Ok(())
}

/// Create the data directory, a default config and the data ignore file,
/// leaving existing files alone. Returns the config now in effect.
fn scaffold(base_path: &Path) -> Result<Config> {
    let data_dir = base_path.join(".cbtbc");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let config_path = base_path.join("cbtbc.toml");
    let config = if config_path.exists() {
        println!("  {} keeping {}", "•".yellow(), config_path.display());
        Config::load_from(&config_path)?
    } else {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} wrote {}", "+".green(), config_path.display());
        config
    };

    let ignore_path = data_dir.join(".gitignore");
    if !ignore_path.exists() {
        std::fs::write(&ignore_path, DATA_IGNORE)
            .with_context(|| format!("Failed to write {}", ignore_path.display()))?;
        println!("  {} wrote {}", "+".green(), ignore_path.display());
    }

    Ok(config)
}
