pub mod aggregates;
pub mod value_objects;

pub use aggregates::ScrapeConfig;
pub use value_objects::{ExtensionSet, IgnoreList, ScrapeLimits};
