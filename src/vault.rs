//! Vault scanning: enumerating and reading note files.

use crate::config::Config;
use crate::error::{QueryError, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// A directory of notes to run queries against.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
    config: Config,
}

impl Vault {
    /// Open a vault rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(QueryError::VaultNotFound(root));
        }

        Ok(Self { root, config })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// List note files with a configured extension, sorted, relative to the
    /// vault root. Ignored directories are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let mut notes = Vec::new();

        for extension in &self.config.extensions {
            let pattern = self.root.join(format!("**/*.{}", extension));
            let pattern_str = pattern.to_string_lossy().to_string();

            for entry in glob(&pattern_str)? {
                match entry {
                    Ok(path) => {
                        if !path.is_file() {
                            continue;
                        }
                        if let Ok(relative) = path.strip_prefix(&self.root) {
                            if !self.config.is_ignored(relative) {
                                notes.push(relative.to_path_buf());
                            }
                        }
                    }
                    Err(e) => {
                        // Log but continue on glob errors
                        eprintln!("Warning: glob error: {}", e);
                    }
                }
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Read the full content of a note.
    pub fn read_note(&self, relative_path: &Path) -> Result<String> {
        let full_path = self.note_path(relative_path);
        if !full_path.is_file() {
            return Err(QueryError::NoteNotFound(relative_path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(full_path)?)
    }
}
