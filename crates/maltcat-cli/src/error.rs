//! Error conversion utilities for CLI.
//!
//! Converts maltcat-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use maltcat_core::CatalogError;
use std::io::ErrorKind;
use std::path::Path;

/// Converts `CatalogError` to user-friendly anyhow error with context
pub fn convert_catalog_error(err: CatalogError, archive: &Path) -> anyhow::Error {
    match err {
        CatalogError::Io(io_err) if io_err.kind() == ErrorKind::NotFound => {
            anyhow!(
                "Archive not found: '{}'\n\
                 HINT: Pass the path to a Maltego graph file (.mtgl) as the first argument.",
                archive.display()
            )
        }
        CatalogError::Io(io_err) => {
            anyhow!(
                "I/O error while opening '{}': {}",
                archive.display(),
                io_err
            )
        }
        CatalogError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: Maltego graph files are zip containers; the file may be corrupted or of another format.",
                archive.display(),
                reason
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error reading archive '{}'", archive.display())),
    }
}

/// Adds context to a catalog reading result
pub fn add_archive_context<T>(
    result: Result<T, CatalogError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_catalog_error(e, archive))
}
