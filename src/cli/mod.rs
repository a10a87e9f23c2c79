//! CLI command implementations.

pub mod args;
pub mod output;

pub mod filter;
pub mod matches;
pub mod parse;

pub use args::{Cli, Commands};
pub use output::Output;
