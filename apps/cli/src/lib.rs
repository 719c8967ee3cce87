pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use std::io::{BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::clean::{clean_file, CleanSummary, OutputFormat};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::output::{confirm_overwrite, derive_output_path};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cleaned(CleanSummary),
    /// The user declined to overwrite an existing output; nothing written.
    Cancelled,
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let stdin = std::io::stdin();
    match execute(cli, &config, stdin.lock(), std::io::stdout())? {
        Outcome::Cleaned(summary) => {
            println!("Successfully processed {} entries", summary.entries);
            println!("Preserved {} Anki headers", summary.headers);
            if summary.skipped > 0 {
                println!("Skipped {} incomplete records", summary.skipped);
            }
            println!("Output saved to: {}", summary.output.display());
        }
        Outcome::Cancelled => println!("Operation cancelled."),
    }

    Ok(())
}

/// Resolve paths, confirm overwrites through `answers`/`prompt`, and clean.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    config: &Config,
    answers: R,
    prompt: W,
) -> Result<Outcome> {
    if !cli.input.is_file() {
        return Err(error::AppError::InputNotFound(cli.input));
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Tsv
    };
    let output = cli
        .output
        .unwrap_or_else(|| derive_output_path(&cli.input, &config.output_suffix, cli.json));

    let assume_yes = cli.yes || config.assume_yes;
    if output.exists() && !assume_yes && !confirm_overwrite(&output, answers, prompt)? {
        tracing::info!(output = %output.display(), "overwrite declined");
        return Ok(Outcome::Cancelled);
    }

    let summary = clean_file(&cli.input, &output, format)?;
    tracing::info!(
        entries = summary.entries,
        headers = summary.headers,
        skipped = summary.skipped,
        orphaned_lines = summary.orphaned_lines,
        "done"
    );
    Ok(Outcome::Cleaned(summary))
}
