// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, InfraResult, InfrastructureError, PresentationError, Result, ScrapeError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::FileSize;
