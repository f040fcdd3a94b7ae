// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use corpus_scrape_ports::filesystem::{FileSource, WalkEntries};
use corpus_scrape_shared_kernel::{FileSize, InfrastructureError, Result};
use ignore::{DirEntry, WalkBuilder};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileSource` port on the local disk.
///
/// Every regular file is visited: hidden files, `.gitignore` rules and other
/// ignore files are not consulted. Symlinks are not followed. Siblings are
/// visited in file-name order so repeated runs produce the same document.
#[derive(Debug, Default)]
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_file())
}

fn walk_error(root: &Path, details: impl Into<String>) -> InfrastructureError {
    InfrastructureError::Walk { root: root.to_path_buf(), details: details.into() }
}

impl FileSource for LocalFileSource {
    fn walk<'a>(&'a self, root: &Path) -> WalkEntries<'a> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let root = root.to_path_buf();
        Box::new(walker.filter_map(move |entry| -> Option<Result<PathBuf>> {
            match entry {
                // A root that is not a directory has nothing under it.
                Ok(entry) if entry.depth() == 0 && !entry.path().is_dir() => {
                    Some(Err(walk_error(&root, "not a directory").into()))
                }
                Ok(entry) if is_regular_file(&entry) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(Err(walk_error(&root, err.to_string()).into())),
            }
        }))
    }

    fn file_size(&self, path: &Path) -> Result<FileSize> {
        Ok(FileReader::size(path)?)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(FileReader::read_utf8(path)?)
    }
}
