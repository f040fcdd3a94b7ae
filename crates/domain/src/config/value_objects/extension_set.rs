// crates/domain/src/config/value_objects/extension_set.rs
use std::{collections::BTreeSet, fmt};

use super::split_list;

/// Set of wanted file extensions, stored without the leading dot.
///
/// Matching is exact and case-sensitive: `py` does not accept `a.PY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Parse a comma separated list such as `py,.rs, md`.
    pub fn parse(list: &str) -> Self {
        split_list(list).collect()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn strip_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|e| strip_dot(e.as_ref()).to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}
