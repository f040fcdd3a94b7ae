// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::parsers::SizeArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "corpus_scrape",
    version = crate::VERSION,
    about = "Collect files from directory trees into a single JSON document"
)]
pub struct Args {
    /// Comma separated list of file extensions to scrape (leading dot optional)
    #[arg(long, default_value = "py")]
    pub extensions: String,

    /// Maximum size of a single file (bytes; K/M/G suffixes allowed)
    #[arg(long, default_value = "1000000")]
    pub max_size: SizeArg,

    /// Maximum total size of all scraped files (bytes; K/M/G suffixes allowed)
    #[arg(long, default_value = "100000000")]
    pub max_total_size: SizeArg,

    /// Comma separated list of path substrings to ignore
    #[arg(long, default_value = "")]
    pub ignore_dirs: String,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Suppress progress and summary lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Comma separated list of directories to scrape
    pub dirs: String,

    /// Output JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
}
