//! notequery CLI entry point.

use clap::Parser;
use notequery::cli::args::{Cli, Commands};
use notequery::cli::output::Output;
use notequery::cli::{filter, matches, parse};
use notequery::config::Config;
use notequery::error::QueryError;
use notequery::vault::Vault;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), QueryError> {
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Parse(args) => parse::run(args, &output),
        Commands::Filter(args) => {
            let config = Config::load()?;
            let vault = Vault::new(&args.vault, config)?;
            filter::run(&vault, args, &output)
        }
        Commands::Match(args) => matches::run(args, &output),
    }
}
