// crates/ports/src/progress.rs
use std::path::Path;

use corpus_scrape_shared_kernel::{FileSize, Result};

pub trait ProgressSink: Send + Sync {
    /// Called before root `index` (1-based) of `total` is walked.
    fn on_directory(&self, index: usize, total: usize, directory: &Path) -> Result<()>;
    fn on_complete(&self, file_count: usize, total_size: FileSize) -> Result<()>;
    /// Called once the output document is on disk.
    fn on_written(&self, output: &Path) -> Result<()>;
}
