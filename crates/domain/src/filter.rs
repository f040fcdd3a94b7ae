// crates/domain/src/filter.rs
use std::path::Path;

use corpus_scrape_shared_kernel::FileSize;

use crate::config::{ExtensionSet, IgnoreList, ScrapeLimits};

/// Extension of a file name: everything after the last `.`, or `""` when the
/// name has no dot. `.bashrc` yields `bashrc` and `archive.tar.gz` yields `gz`.
pub fn extension_of(file_name: &str) -> &str {
    file_name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

/// Metadata-free predicates deciding whether a candidate may be scraped.
///
/// The I/O half (stat, read) lives with the use case; everything here is pure.
#[derive(Debug, Clone, Copy)]
pub struct FileFilter<'a> {
    extensions: &'a ExtensionSet,
    ignore: &'a IgnoreList,
    limits: ScrapeLimits,
}

impl<'a> FileFilter<'a> {
    pub fn new(extensions: &'a ExtensionSet, ignore: &'a IgnoreList, limits: ScrapeLimits) -> Self {
        Self { extensions, ignore, limits }
    }

    pub fn wants_extension(&self, path: &Path) -> bool {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        self.extensions.contains(extension_of(&name))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.matches(&path.to_string_lossy())
    }

    pub fn admits_size(&self, size: FileSize) -> bool {
        self.limits.admits_file(size)
    }

    pub fn limits(&self) -> ScrapeLimits {
        self.limits
    }
}
