// crates/usecase/src/orchestrator.rs
use std::path::Path;

use corpus_scrape_domain::{
    config::ScrapeConfig,
    filter::FileFilter,
    model::{DirectoryScrape, ScrapeResult},
};
use corpus_scrape_ports::{clock::Clock, filesystem::FileSource, progress::ProgressSink};
use tracing::{debug, info, warn};

use crate::scraper::FileScraper;

/// Walks every configured root in order and aggregates accepted files until
/// the total size cap is crossed.
pub struct ScrapeDirectories<'a> {
    source: &'a dyn FileSource,
    scraper: FileScraper<'a>,
    progress: &'a dyn ProgressSink,
}

impl<'a> ScrapeDirectories<'a> {
    pub fn new(source: &'a dyn FileSource, clock: &'a dyn Clock, progress: &'a dyn ProgressSink) -> Self {
        Self { source, scraper: FileScraper::new(source, clock), progress }
    }

    pub fn run(&self, config: &ScrapeConfig) -> ScrapeResult {
        let filter = config.filter();
        let limits = config.limits;
        let total = config.directories.len();
        let mut result = ScrapeResult::default();

        for (index, directory) in config.directories.iter().enumerate() {
            if let Err(err) = self.progress.on_directory(index + 1, total, directory) {
                warn!("progress reporting failed: {err}");
            }
            result.absorb(self.scrape_directory(directory, &filter));

            if limits.total_exceeded(result.total_size) {
                info!(
                    total_size = result.total_size.bytes(),
                    skipped = total - index - 1,
                    "total size cap reached, remaining directories skipped"
                );
                break;
            }
        }

        if let Err(err) = self.progress.on_complete(result.file_count, result.total_size) {
            warn!("progress reporting failed: {err}");
        }
        result
    }

    /// Scrape one root. The running total here is local to `directory`.
    ///
    /// A traversal error ends the walk of this root; whatever was accepted
    /// before it is returned.
    pub fn scrape_directory(&self, directory: &Path, filter: &FileFilter<'_>) -> DirectoryScrape {
        let limits = filter.limits();
        let mut scrape = DirectoryScrape::default();

        for entry in self.source.walk(directory) {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    warn!("{err}");
                    break;
                }
            };
            if filter.is_ignored(&path) {
                debug!(path = %path.display(), "ignored");
                continue;
            }
            let Some(file) = self.scraper.scrape(&path, filter) else {
                continue;
            };

            scrape.total_size += file.size;
            scrape.files.push(file);
            if limits.total_exceeded(scrape.total_size) {
                debug!(directory = %directory.display(), "total size cap crossed");
                break;
            }
            scrape.file_count += 1;
        }

        scrape
    }
}
