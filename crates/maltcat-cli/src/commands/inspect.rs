//! Inspect stage: look inside the graph's index directories.

use crate::cli::Cli;
use crate::output::OutputFormatter;
use crate::progress::Spinner;
use anyhow::Result;
use maltcat_core::Inspector;
use maltcat_core::inspect_graph;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let helper = cli.helper.to_config();
    let uses_helper = helper.is_some();
    let inspector = Inspector::new(helper);

    formatter.format_section("Processing Extracted Graph Data");

    let results = if uses_helper && !cli.json && !cli.quiet && Spinner::should_show() {
        let _spinner = Spinner::new("Inspecting index directories");
        inspect_graph(&cli.graph_root, &inspector)
    } else {
        inspect_graph(&cli.graph_root, &inspector)
    };

    formatter.format_inspection(&cli.graph_root, &inspector.describe(), &results)?;

    Ok(())
}
