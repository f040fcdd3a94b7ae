// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use corpus_scrape_shared_kernel::{FileSize, Result};

/// Lazily produced regular-file paths under a walk root.
pub type WalkEntries<'a> = Box<dyn Iterator<Item = Result<PathBuf>> + 'a>;

/// Port for reading a directory tree.
pub trait FileSource: Send + Sync {
    /// Regular files under `root`, depth first, each path prefixed with `root`
    /// as given. An `Err` item reports a traversal failure.
    fn walk<'a>(&'a self, root: &Path) -> WalkEntries<'a>;

    /// Current byte size of `path`.
    fn file_size(&self, path: &Path) -> Result<FileSize>;

    /// Whole file decoded as UTF-8, bytes untouched.
    fn read_text(&self, path: &Path) -> Result<String>;
}
