//! Maltcat CLI - Inspects Maltego graph archives and the Lucene index
//! directories of extracted graphs.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    commands::catalog::execute(&cli, &*formatter)?;
    commands::inspect::execute(&cli, &*formatter)
}
