// crates/shared-kernel/src/path.rs
use std::{collections::HashSet, path::MAIN_SEPARATOR_STR};

/// Normalize a path string lexically, without touching the filesystem.
///
/// Redundant separators and `.` segments are dropped and `..` cancels the
/// preceding segment. A leading `..` is kept for relative paths and dropped at
/// the root of an absolute one. The empty path normalizes to `.`.
pub fn normalize_lexical(path: &str) -> String {
    let absolute = path.starts_with(std::path::is_separator);
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split(std::path::is_separator) {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join(MAIN_SEPARATOR_STR);
    match (absolute, joined.is_empty()) {
        (true, _) => format!("{MAIN_SEPARATOR_STR}{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Order-preserving dedup keyed on the normalized form of each path.
///
/// The first spelling of a path wins and is returned unchanged.
pub fn dedup_paths<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    paths
        .into_iter()
        .map(Into::into)
        .filter(|p| seen.insert(normalize_lexical(p)))
        .collect()
}
