//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`scraper`]: turns one candidate path into a record, or rejects it
//! - [`orchestrator`]: walks the roots, applies the cutoff and aggregates
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;
pub mod scraper;

pub use orchestrator::ScrapeDirectories;
pub use scraper::FileScraper;

#[cfg(test)]
pub(crate) mod testing;
