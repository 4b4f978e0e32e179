//! Catalog stage: read entity type definitions out of the archive.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CatalogPrinter;
use anyhow::Result;
use maltcat_core::CatalogConfig;
use maltcat_core::NoopProgress;
use maltcat_core::read_catalog_with_progress;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = CatalogConfig {
        entry_suffix: cli.entry_suffix.clone(),
    };

    formatter.format_section("Parsing Maltego File");

    // Per-entity lines only make sense in human output
    let report = if cli.json {
        let mut noop = NoopProgress;
        add_archive_context(
            read_catalog_with_progress(&cli.archive, &config, &mut noop),
            &cli.archive,
        )?
    } else {
        let mut printer = CatalogPrinter::new(cli.verbose, cli.quiet);
        add_archive_context(
            read_catalog_with_progress(&cli.archive, &config, &mut printer),
            &cli.archive,
        )?
    };

    formatter.format_catalog_report(&cli.archive, &report)?;

    Ok(())
}
