//! Command-line interface module.

mod args;
pub mod common;
pub mod hash;
pub mod migrate;
pub mod render;

pub use args::{Cli, Commands};
