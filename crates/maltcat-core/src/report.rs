//! Catalog reading reports and progress callbacks.

use std::time::Duration;

use crate::CatalogError;
use crate::catalog::EntityTypeCatalog;
use crate::catalog::EntityTypeDefinition;
use crate::catalog::FieldDefinition;

/// An archive entry that matched the definition suffix but was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Archive entry name.
    pub entry: String,
    /// Rendered error that caused the skip.
    pub reason: String,
}

/// Result of reading an entity catalog from an archive.
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    /// Parsed entity types.
    pub catalog: EntityTypeCatalog,

    /// Total number of entries in the archive.
    pub entries_total: usize,

    /// Number of entries whose name matched the definition suffix.
    pub entries_matched: usize,

    /// Matching entries that could not be parsed.
    pub skipped: Vec<SkippedEntry>,

    /// Time spent reading the archive.
    pub duration: Duration,
}

impl CatalogReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skipped entry.
    pub fn add_skipped(&mut self, entry: impl Into<String>, error: &CatalogError) {
        self.skipped.push(SkippedEntry {
            entry: entry.into(),
            reason: error.to_string(),
        });
    }

    /// Returns `true` if any matching entry was skipped.
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Callback trait for observing catalog reading as it happens.
///
/// Calls arrive in archive entry order; for each parsed definition,
/// `on_definition` comes first and is followed by one `on_field` per field
/// in document order.
///
/// # Examples
///
/// ```
/// use maltcat_core::CatalogError;
/// use maltcat_core::CatalogProgress;
/// use maltcat_core::EntityTypeDefinition;
/// use maltcat_core::FieldDefinition;
///
/// struct Printer;
///
/// impl CatalogProgress for Printer {
///     fn on_definition(&mut self, _entry: &str, definition: &EntityTypeDefinition) {
///         println!("Entity: {} - {}", definition.id(), definition.display_name());
///     }
///
///     fn on_field(&mut self, _definition: &EntityTypeDefinition, field: &FieldDefinition) {
///         println!("  Field: {} ({})", field.name, field.field_type);
///     }
///
///     fn on_entry_error(&mut self, entry: &str, error: &CatalogError) {
///         println!("Error parsing {entry}: {error}");
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait CatalogProgress {
    /// Called after a definition entry has been parsed.
    fn on_definition(&mut self, entry: &str, definition: &EntityTypeDefinition);

    /// Called for each field of the definition just reported.
    fn on_field(&mut self, definition: &EntityTypeDefinition, field: &FieldDefinition);

    /// Called when a matching entry is skipped.
    fn on_entry_error(&mut self, entry: &str, error: &CatalogError);

    /// Called once after the last entry.
    fn on_complete(&mut self);
}

/// No-op implementation of `CatalogProgress`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl CatalogProgress for NoopProgress {
    fn on_definition(&mut self, _entry: &str, _definition: &EntityTypeDefinition) {}

    fn on_field(&mut self, _definition: &EntityTypeDefinition, _field: &FieldDefinition) {}

    fn on_entry_error(&mut self, _entry: &str, _error: &CatalogError) {}

    fn on_complete(&mut self) {}
}
