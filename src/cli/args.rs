//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notequery")]
#[command(author, version, about = "Boolean search queries over Obsidian-style notes", long_about = None)]
pub struct Cli {
    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a query and print its element sequence
    Parse(ParseArgs),

    /// Run a query against every note in a vault
    Filter(FilterArgs),

    /// Test a query against files, or against each line of stdin
    Match(MatchArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// The query string
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// The query string
    pub query: String,

    /// Path to the vault directory
    #[arg(long, default_value = ".")]
    pub vault: PathBuf,
}

#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// The query string
    pub query: String,

    /// Files to test; with no files, lines are read from stdin and matching
    /// lines are echoed
    pub files: Vec<PathBuf>,
}
