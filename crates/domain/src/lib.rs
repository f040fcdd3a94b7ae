//! # Domain
//!
//! Records, run configuration and the pure half of the file filter.
//!
//! - [`model`]: [`model::ScrapedFile`] and the per-directory/aggregate results
//! - [`config`]: extension set, ignore list, size limits and the run config
//! - [`filter`]: extension, ignore and size predicates applied to candidates

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filter;
pub mod model;
