//! The boolean search-query language: parsing and evaluation.

pub mod matcher;
pub mod parser;
pub mod types;

pub use matcher::evaluate;
pub use parser::parse;
pub use types::*;
