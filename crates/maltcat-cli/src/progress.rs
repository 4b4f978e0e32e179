//! Progress reporting for CLI operations.

use console::Term;
use console::style;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use maltcat_core::CatalogError;
use maltcat_core::CatalogProgress;
use maltcat_core::EntityTypeDefinition;
use maltcat_core::FieldDefinition;
use std::time::Duration;

/// Prints one line per parsed entity type, field and skipped entry.
///
/// In quiet mode only skipped entries are printed.
pub struct CatalogPrinter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl CatalogPrinter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn definition_line(definition: &EntityTypeDefinition) -> String {
        format!(
            "Entity: {} - {}",
            definition.id(),
            definition.display_name()
        )
    }

    fn field_line(field: &FieldDefinition) -> String {
        format!(
            "  Field: {} ({}) - {}",
            field.name, field.field_type, field.display_name
        )
    }
}

impl CatalogProgress for CatalogPrinter {
    fn on_definition(&mut self, _entry: &str, definition: &EntityTypeDefinition) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&Self::definition_line(definition));
    }

    fn on_field(&mut self, _definition: &EntityTypeDefinition, field: &FieldDefinition) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&Self::field_line(field));
        if self.verbose && !field.description.is_empty() {
            let _ = self
                .term
                .write_line(&format!("    {}", field.description));
        }
    }

    fn on_entry_error(&mut self, entry: &str, error: &CatalogError) {
        // Always shown, even in quiet mode
        let line = format!("Error parsing {entry}: {error}");
        if self.use_colors {
            let _ = self.term.write_line(&style(line).red().to_string());
        } else {
            let _ = self.term.write_line(&line);
        }
    }

    fn on_complete(&mut self) {}
}

/// Spinner shown while the helper blocks on an interactive terminal.
///
/// Cleared on drop.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Checks if we should show the spinner (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
