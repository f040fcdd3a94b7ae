// src/cli/mod.rs
mod args;
mod parsers;

pub use args::Args;
pub use parsers::SizeArg;
