// crates/domain/src/model/entities/scraped_file.rs
use std::path::Path;

use chrono::NaiveDateTime;
use corpus_scrape_shared_kernel::FileSize;
use serde::{Deserialize, Serialize};

/// One accepted file, as written to the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedFile {
    /// Base file name.
    pub name: String,
    /// Containing directory exactly as produced by the walk (relative roots stay relative).
    pub directory: String,
    pub content: String,
    pub size: FileSize,
    pub scraped_at: NaiveDateTime,
}

impl ScrapedFile {
    pub fn new(path: &Path, content: String, size: FileSize, scraped_at: NaiveDateTime) -> Self {
        let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let directory = path.parent().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default();
        Self { name, directory, content, size, scraped_at }
    }
}
