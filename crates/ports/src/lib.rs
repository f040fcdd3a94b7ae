//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal, stat and text reads
//! - [`clock`]: timestamps stamped onto scraped records
//! - [`progress`]: progress reporting for the directory loop
//!
//! These ports allow the use cases to be driven by in-memory fakes in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod filesystem;
pub mod progress;
