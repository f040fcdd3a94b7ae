// crates/domain/src/config/value_objects/ignore_list.rs
use corpus_scrape_shared_kernel::path::{dedup_paths, normalize_lexical};

use super::split_list;

/// Path substrings that exclude a candidate from collection.
///
/// Entries are deduplicated, then stored in normalized form. Matching is plain
/// substring containment on the whole candidate path, so `src` also excludes
/// `src2/file.py`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList(Vec<String>);

impl IgnoreList {
    pub fn parse(list: &str) -> Self {
        Self::new(split_list(list))
    }

    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedup_paths(entries).iter().map(|e| normalize_lexical(e)).collect())
    }

    pub fn matches(&self, path: &str) -> bool {
        self.0.iter().any(|entry| path.contains(entry.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }
}
