// src/app.rs
use anyhow::{Context, Result};
use corpus_scrape_domain::model::ScrapeResult;
use corpus_scrape_infra::{JsonResultWriter, LocalFileSource, SystemClock};
use corpus_scrape_ports::progress::ProgressSink;
use corpus_scrape_usecase::ScrapeDirectories;
use tracing::{info, warn};

use crate::{cli::Args, config::AppConfig, presentation::ConsoleProgress};

/// Parse-to-output pipeline for one invocation.
pub fn run(args: Args) -> Result<ScrapeResult> {
    let config = AppConfig::from_args(args).context("invalid configuration")?;
    let progress = ConsoleProgress::new(config.quiet);
    execute(&config, &progress)
}

/// Scrape every root and write the document. Once the document is written the
/// run has succeeded; reporting failures after that point are only logged.
pub fn execute(config: &AppConfig, progress: &dyn ProgressSink) -> Result<ScrapeResult> {
    let scrape = &config.scrape;
    info!(
        directories = scrape.directories.len(),
        extensions = %scrape.extensions,
        ignored = scrape.ignore.entries().len(),
        "starting scrape"
    );

    let source = LocalFileSource::new();
    let result = ScrapeDirectories::new(&source, &SystemClock, progress).run(scrape);

    JsonResultWriter::new(config.pretty)
        .write(&result, &scrape.output)
        .context("failed to write output")?;
    if let Err(err) = progress.on_written(&scrape.output) {
        warn!("progress reporting failed: {err}");
    }
    Ok(result)
}
