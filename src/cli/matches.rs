//! Match command implementation.

use crate::cli::args::MatchArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search;
use serde::Serialize;
use std::io::{self, BufRead};

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<FileMatch>,
}

#[derive(Debug, Serialize)]
pub struct FileMatch {
    pub path: String,
    pub matched: bool,
}

pub fn run(args: &MatchArgs, output: &Output) -> Result<()> {
    let query = search::parse(&args.query)?;

    // grep-style: no files means filter stdin line by line.
    if args.files.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if query.matches(&line) {
                output.print_raw(&line);
            }
        }
        return Ok(());
    }

    let mut results = Vec::new();
    for path in &args.files {
        let content = std::fs::read_to_string(path)?;
        results.push(FileMatch {
            path: path.to_string_lossy().to_string(),
            matched: query.matches(&content),
        });
    }

    let total = results.iter().filter(|r| r.matched).count();
    let response = MatchResponse {
        query: args.query.clone(),
        total,
        results,
    };
    output.print(&response)?;

    Ok(())
}
