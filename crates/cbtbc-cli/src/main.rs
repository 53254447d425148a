//! cbtbc CLI - train and run conditions-based text classifiers.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "cbtbc")]
#[command(author, version, about = "cbtbc - Conditions-based binary text classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new cbtbc project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Select conditions against a labeled corpus and save the model
    Train {
        /// JSON file holding an array of {"text", "label"} records
        corpus: String,

        /// Where to write the trained model (default: .cbtbc/model.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Search method, overriding the config
        #[arg(short, long)]
        method: Option<String>,

        /// Restarts for randomized and hybrid search
        #[arg(short, long)]
        n_iter: Option<usize>,

        /// Seed for reproducible randomized search
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Classify documents with a trained model
    Classify {
        /// Files to classify
        files: Vec<String>,

        /// Classify this text instead of files
        #[arg(short, long)]
        text: Option<String>,

        /// Model file (default: .cbtbc/model.json)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show a saved model
    Inspect {
        /// Model file (default: .cbtbc/model.json)
        model: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Train {
            corpus,
            output,
            method,
            n_iter,
            seed,
        } => commands::train::run(
            &corpus,
            output.as_deref(),
            commands::train::Overrides {
                method,
                n_iter,
                seed,
            },
        ),
        Commands::Classify { files, text, model } => {
            commands::classify::run(&files, text.as_deref(), model.as_deref(), cli.verbose)
        }
        Commands::Inspect { model } => commands::inspect::run(model.as_deref()),
    }
}
