// crates/domain/src/model/entities/scrape_result.rs
use corpus_scrape_shared_kernel::FileSize;
use serde::{Deserialize, Serialize};

use super::ScrapedFile;

/// Files collected from a single root before the cutoff, if any, was hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryScrape {
    pub files: Vec<ScrapedFile>,
    pub total_size: FileSize,
    /// Files counted for this root. The file whose size pushed the running
    /// total over the cap is kept in `files` but not counted here.
    pub file_count: usize,
}

/// Aggregate output of a run, serialized as the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub files: Vec<ScrapedFile>,
    pub total_size: FileSize,
    pub file_count: usize,
}

impl ScrapeResult {
    pub fn absorb(&mut self, directory: DirectoryScrape) {
        self.files.extend(directory.files);
        self.total_size += directory.total_size;
        self.file_count += directory.file_count;
    }
}
