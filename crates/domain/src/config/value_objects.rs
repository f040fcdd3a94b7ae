pub mod extension_set;
pub mod ignore_list;
pub mod limits;

pub use extension_set::ExtensionSet;
pub use ignore_list::IgnoreList;
pub use limits::ScrapeLimits;

/// Split a comma separated CLI list, trimming entries and dropping empty ones.
pub(crate) fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
