//! notequery - A boolean search-query language for Obsidian-style notes.
//!
//! # Overview
//!
//! notequery parses a small search language into a flat sequence of terms
//! and operators, then evaluates it against candidate text:
//!
//! - Bare words are terms, matched as case-insensitive substrings.
//! - `"..."` or `'...'` quotes a phrase (spaces and operators stay literal).
//! - `\` escapes the next character.
//! - `&` is AND, `|` is OR, `!` negates the next term (or operator).
//! - Adjacent terms combine with an implicit AND.
//! - Evaluation is strictly left to right with no operator precedence.
//!
//! # Example
//!
//! ```
//! use notequery::parse;
//!
//! let query = parse("\"meeting notes\" & !archived").unwrap();
//! assert!(query.matches("Meeting notes from Tuesday"));
//! assert!(!query.matches("archived meeting notes"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use error::{QueryError, Result};
pub use search::{Operator, SearchElement, SearchQuery, parse};
pub use vault::Vault;
