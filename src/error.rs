//! Error types and exit codes for notequery.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_QUERY: i32 = 2;
    pub const VAULT_NOT_FOUND: i32 = 3;
    pub const NOTE_NOT_FOUND: i32 = 4;
}

/// Main error type for notequery operations.
#[derive(Error, Debug)]
pub enum QueryError {
    /// A quote character opened a quoted span that was never closed.
    #[error("Unmatched quote")]
    UnmatchedQuote,

    /// Two `&`/`|` operator tokens with no term between them.
    #[error("Consecutive operators are not allowed")]
    ConsecutiveOperators,

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl QueryError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            QueryError::UnmatchedQuote | QueryError::ConsecutiveOperators => {
                exit_code::INVALID_QUERY
            }
            QueryError::VaultNotFound(_) => exit_code::VAULT_NOT_FOUND,
            QueryError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for notequery operations.
pub type Result<T> = std::result::Result<T, QueryError>;
