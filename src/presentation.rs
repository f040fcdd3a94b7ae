// src/presentation.rs
use std::{fmt::Display, path::Path};

use console::{Term, style};
use corpus_scrape_ports::progress::ProgressSink;
use corpus_scrape_shared_kernel::{FileSize, Result};

/// Console progress on stderr. Silent when `quiet` is set.
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    term: Term,
    quiet: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        Self { term: Term::stderr(), quiet }
    }

    fn success(&self, message: impl Display) -> Result<()> {
        if !self.quiet {
            self.term.write_line(&format!("{} {message}", style("✔").for_stderr().green().bold()))?;
        }
        Ok(())
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_directory(&self, index: usize, total: usize, directory: &Path) -> Result<()> {
        if !self.quiet {
            self.term.write_line(&format!(
                "{} Scraping directory: {}",
                style(progress_label(index, total)).for_stderr().cyan(),
                directory.display()
            ))?;
        }
        Ok(())
    }

    fn on_complete(&self, file_count: usize, total_size: FileSize) -> Result<()> {
        self.success(summary_line(file_count, total_size))
    }

    fn on_written(&self, output: &Path) -> Result<()> {
        self.success(format!("Output written to {}", output.display()))
    }
}

/// `[i/n]` with `i` padded to the width of `n`.
pub fn progress_label(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("[{index:>width$}/{total}]")
}

pub fn summary_line(file_count: usize, total_size: FileSize) -> String {
    format!("Scraped {file_count} files with total size {total_size} bytes ({total_size:#})")
}

/// Fatal errors are always printed, even in quiet mode.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("error:").for_stderr().red().bold());
}
