// crates/usecase/src/scraper.rs
use std::path::Path;

use corpus_scrape_domain::{filter::FileFilter, model::ScrapedFile};
use corpus_scrape_ports::{clock::Clock, filesystem::FileSource};
use corpus_scrape_shared_kernel::FileSize;
use tracing::{debug, warn};

/// Applies the file filter to a single candidate, reading size and content
/// through the [`FileSource`] port.
///
/// Every I/O failure is logged and turned into a rejection; nothing here
/// returns an error.
pub struct FileScraper<'a> {
    source: &'a dyn FileSource,
    clock: &'a dyn Clock,
}

impl<'a> FileScraper<'a> {
    pub fn new(source: &'a dyn FileSource, clock: &'a dyn Clock) -> Self {
        Self { source, clock }
    }

    pub fn scrape(&self, path: &Path, filter: &FileFilter<'_>) -> Option<ScrapedFile> {
        if !filter.wants_extension(path) || filter.is_ignored(path) {
            return None;
        }

        let size = self.size_of(path);
        if !filter.admits_size(size) {
            debug!(path = %path.display(), size = size.bytes(), "size outside bounds");
            return None;
        }

        let content = self.content_of(path)?;
        Some(ScrapedFile::new(path, content, size, self.clock.now()))
    }

    fn size_of(&self, path: &Path) -> FileSize {
        self.source.file_size(path).unwrap_or_else(|err| {
            warn!("{err}");
            FileSize::zero()
        })
    }

    fn content_of(&self, path: &Path) -> Option<String> {
        match self.source.read_text(path) {
            Ok(content) if content.is_empty() => None,
            Ok(content) => Some(content),
            Err(err) => {
                warn!("{err}");
                None
            }
        }
    }
}
