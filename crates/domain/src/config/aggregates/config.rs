// crates/domain/src/config/aggregates/config.rs
use std::path::PathBuf;

use corpus_scrape_shared_kernel::{DomainError, DomainResult, path::dedup_paths};

use crate::{
    config::value_objects::{ExtensionSet, IgnoreList, ScrapeLimits, split_list},
    filter::FileFilter,
};

/// Fully validated settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Roots to walk, deduplicated, in the order they were given.
    pub directories: Vec<PathBuf>,
    pub extensions: ExtensionSet,
    pub ignore: IgnoreList,
    pub limits: ScrapeLimits,
    pub output: PathBuf,
}

impl ScrapeConfig {
    /// Build a config, rejecting runs with no directories or no extensions.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidConfiguration`] when either list is empty
    /// after normalization.
    pub fn new<I, S>(
        directories: I,
        extensions: ExtensionSet,
        ignore: IgnoreList,
        limits: ScrapeLimits,
        output: impl Into<PathBuf>,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let directories: Vec<PathBuf> = dedup_paths(
            directories.into_iter().map(Into::into).filter(|d: &String| !d.trim().is_empty()),
        )
        .into_iter()
        .map(PathBuf::from)
        .collect();

        if directories.is_empty() {
            return Err(invalid("No directories provided"));
        }
        if extensions.is_empty() {
            return Err(invalid("No extensions provided"));
        }

        Ok(Self { directories, extensions, ignore, limits, output: output.into() })
    }

    /// Convenience constructor from the raw comma separated CLI lists.
    ///
    /// # Errors
    /// See [`ScrapeConfig::new`].
    pub fn from_lists(
        directories: &str,
        extensions: &str,
        ignore_dirs: &str,
        limits: ScrapeLimits,
        output: impl Into<PathBuf>,
    ) -> DomainResult<Self> {
        Self::new(
            split_list(directories),
            ExtensionSet::parse(extensions),
            IgnoreList::parse(ignore_dirs),
            limits,
            output,
        )
    }

    pub fn filter(&self) -> FileFilter<'_> {
        FileFilter::new(&self.extensions, &self.ignore, self.limits)
    }
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidConfiguration { reason: reason.to_string() }
}
