//! Reading the entity catalog out of a zip archive.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use crate::CatalogConfig;
use crate::CatalogError;
use crate::Result;
use crate::catalog::xml::parse_definition;
use crate::report::CatalogProgress;
use crate::report::CatalogReport;
use crate::report::NoopProgress;

/// Reads every type-definition entry of an archive into a catalog.
///
/// Entries that fail to parse are recorded in
/// [`CatalogReport::skipped`] and do not stop the read.
///
/// # Errors
///
/// Returns an error only if the archive itself cannot be opened: the file
/// is missing or unreadable, or it is not a zip container.
///
/// # Examples
///
/// ```no_run
/// use maltcat_core::CatalogConfig;
/// use maltcat_core::read_catalog;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = read_catalog("Sample/Maltego.mtgl", &CatalogConfig::default())?;
/// for definition in &report.catalog {
///     println!("{}: {} fields", definition.id(), definition.fields().len());
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_catalog<P: AsRef<Path>>(
    archive_path: P,
    config: &CatalogConfig,
) -> Result<CatalogReport> {
    read_catalog_with_progress(archive_path, config, &mut NoopProgress)
}

/// Reads the catalog, reporting each definition, field and skipped entry
/// to `progress` as it goes.
///
/// # Errors
///
/// Same as [`read_catalog`].
pub fn read_catalog_with_progress<P: AsRef<Path>>(
    archive_path: P,
    config: &CatalogConfig,
    progress: &mut dyn CatalogProgress,
) -> Result<CatalogReport> {
    let start = Instant::now();

    let file = File::open(archive_path.as_ref())?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| CatalogError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;

    let mut report = CatalogReport::new();
    report.entries_total = archive.len();

    for index in 0..archive.len() {
        let Some(name) = archive.name_for_index(index).map(str::to_owned) else {
            continue;
        };
        if !config.matches(&name) {
            continue;
        }
        report.entries_matched += 1;

        let parsed = read_entry_text(&mut archive, index, &name)
            .and_then(|text| parse_definition(&text));

        match parsed {
            Ok(definition) => {
                progress.on_definition(&name, &definition);
                for field in definition.fields() {
                    progress.on_field(&definition, field);
                }
                report.catalog.insert(definition);
            }
            Err(e) if e.is_recoverable() => {
                progress.on_entry_error(&name, &e);
                report.add_skipped(name, &e);
            }
            Err(e) => return Err(e),
        }
    }

    progress.on_complete();
    report.duration = start.elapsed();

    Ok(report)
}

fn read_entry_text<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    index: usize,
    name: &str,
) -> Result<String> {
    let mut entry = archive.by_index(index).map_err(|e| CatalogError::EntryRead {
        entry: name.to_string(),
        source: std::io::Error::other(e),
    })?;

    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|source| CatalogError::EntryRead {
            entry: name.to_string(),
            source,
        })?;

    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
