// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use corpus_scrape_shared_kernel::{FileSize, InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Byte size reported by the filesystem, following symlinks.
    pub fn size(path: &Path) -> InfraResult<FileSize> {
        fs::metadata(path).map(|m| FileSize::new(m.len())).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "stat".to_string(),
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        fs::read(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file and require it to be UTF-8. Line endings are kept as is.
    pub fn read_utf8(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path)?;
        String::from_utf8(bytes).map_err(|_| InfrastructureError::NotText { path: path.to_path_buf() })
    }
}
