//! Filter command implementation.

use crate::cli::args::FilterArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<FilterResult>,
}

#[derive(Debug, Serialize)]
pub struct FilterResult {
    pub path: String,
    pub name: String,
}

pub fn run(vault: &Vault, args: &FilterArgs, output: &Output) -> Result<()> {
    let query = search::parse(&args.query)?;
    let mut results = Vec::new();

    for path in vault.list_notes()? {
        let content = match vault.read_note(&path) {
            Ok(content) => content,
            Err(e) => {
                output.info(&format!("Skipping {}: {}", path.display(), e));
                continue;
            }
        };

        if query.matches(&content) {
            results.push(FilterResult {
                name: path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("")
                    .to_string(),
                path: path.to_string_lossy().to_string(),
            });
        }
    }

    let response = FilterResponse {
        query: args.query.clone(),
        total: results.len(),
        results,
    };
    output.print(&response)?;

    Ok(())
}
