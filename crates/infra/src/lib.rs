// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod filesystem;
pub mod output;
pub mod persistence;

pub use clock::SystemClock;
pub use filesystem::LocalFileSource;
pub use output::JsonResultWriter;
