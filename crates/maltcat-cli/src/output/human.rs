//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use maltcat_core::CatalogReport;
use maltcat_core::InspectionResult;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn plural(n: usize, singular: &str, plural: &str) -> String {
        let word = if n == 1 { singular } else { plural };
        format!("{} {word}", Self::format_number(n))
    }

    fn write_indented(&self, text: &str) {
        for line in text.lines() {
            let _ = self.term.write_line(&format!("  {line}"));
        }
    }

    fn write_warning(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }

    fn write_result(&self, name: &str, result: &InspectionResult) {
        let label = if self.use_colors {
            let summary = match result {
                InspectionResult::Succeeded { .. } => style(result.to_string()).green(),
                InspectionResult::Listed { .. } => style(result.to_string()).cyan(),
                InspectionResult::Absent => style(result.to_string()).dim(),
                InspectionResult::Failed { .. } | InspectionResult::Exception { .. } => {
                    style(result.to_string()).red()
                }
            };
            format!("{}: {summary}", style(name).bold())
        } else {
            format!("{name}: {result}")
        };
        let _ = self.term.write_line(&label);

        match result {
            InspectionResult::Succeeded { stdout } => self.write_indented(stdout),
            InspectionResult::Failed { stderr, .. } => self.write_indented(stderr),
            InspectionResult::Listed { names, reason } => {
                if self.verbose {
                    let _ = self
                        .term
                        .write_line(&format!("  (helper skipped: {reason})"));
                }
                for name in names {
                    let _ = self.term.write_line(&format!("  {name}"));
                }
            }
            InspectionResult::Absent | InspectionResult::Exception { .. } => {}
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_section(&self, title: &str) {
        if self.quiet {
            return;
        }

        let heading = format!("=== {title} ===");
        if self.use_colors {
            let _ = self.term.write_line(&style(heading).bold().to_string());
        } else {
            let _ = self.term.write_line(&heading);
        }
    }

    fn format_catalog_report(&self, archive: &Path, report: &CatalogReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line("");
        let summary = format!(
            "Parsed {} ({}) from {}",
            Self::plural(report.catalog.len(), "entity type", "entity types"),
            Self::plural(report.catalog.field_count(), "field", "fields"),
            Self::plural(report.entries_matched, "definition entry", "definition entries"),
        );
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {summary}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(&summary);
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Archive: {}", archive.display()));
            let _ = self.term.write_line(&format!(
                "  Archive entries: {}",
                Self::format_number(report.entries_total)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        if report.has_skipped() {
            self.write_warning(&format!(
                "{} could not be parsed",
                Self::plural(report.skipped.len(), "definition entry", "definition entries")
            ));
            for skipped in &report.skipped {
                let _ = self.term.write_line(&format!("  - {}", skipped.entry));
            }
        }

        Ok(())
    }

    fn format_inspection(
        &self,
        graph_root: &Path,
        inspector: &str,
        results: &[(String, InspectionResult)],
    ) -> Result<()> {
        // Failures are always shown, even in quiet mode
        if self.quiet {
            for (name, result) in results.iter().filter(|(_, r)| r.is_error()) {
                self.write_result(name, result);
            }
            return Ok(());
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line("Analyzing Lucene indexes:");
        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Graph: {}", graph_root.display()));
            let _ = self.term.write_line(&format!("  Using: {inspector}"));
        }

        for (name, result) in results {
            self.write_result(name, result);
        }

        Ok(())
    }
}
