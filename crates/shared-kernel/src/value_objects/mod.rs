// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_size;

pub use file_size::FileSize;
