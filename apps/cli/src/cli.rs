//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "anki-clean",
    version,
    about = "Strip HTML from a tab-delimited Anki export and rewrite it with canonical headers"
)]
pub struct Cli {
    /// Raw Anki export (.txt)
    pub input: PathBuf,

    /// Output path (default: <input stem><suffix><ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write entries as JSON instead of the tab-delimited format
    #[arg(long)]
    pub json: bool,

    /// Overwrite an existing output file without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}
