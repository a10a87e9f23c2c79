//! Parse command implementation.

use crate::cli::args::ParseArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search::{self, SearchElement};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub query: String,
    pub total: usize,
    pub elements: Vec<SearchElement>,
}

pub fn run(args: &ParseArgs, output: &Output) -> Result<()> {
    let parsed = search::parse(&args.query)?;

    let response = ParseResponse {
        query: args.query.clone(),
        total: parsed.elements.len(),
        elements: parsed.elements,
    };
    output.print(&response)?;

    Ok(())
}
