// crates/domain/src/config/value_objects/limits.rs
use corpus_scrape_shared_kernel::FileSize;

/// Size constraints for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeLimits {
    /// Per-file ceiling, inclusive.
    pub max_file_size: FileSize,
    /// Aggregate ceiling; crossing it ends the walk.
    pub max_total_size: FileSize,
}

impl ScrapeLimits {
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;
    pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 100_000_000;

    pub fn new(max_file_size: u64, max_total_size: u64) -> Self {
        Self { max_file_size: FileSize::new(max_file_size), max_total_size: FileSize::new(max_total_size) }
    }

    /// Non-empty and no larger than the per-file ceiling.
    pub fn admits_file(&self, size: FileSize) -> bool {
        !size.is_zero() && size <= self.max_file_size
    }

    pub fn total_exceeded(&self, total: FileSize) -> bool {
        total > self.max_total_size
    }
}

impl Default for ScrapeLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE, Self::DEFAULT_MAX_TOTAL_SIZE)
    }
}
