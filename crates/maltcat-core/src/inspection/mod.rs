//! Index directory inspection.
//!
//! A graph extracted from an archive keeps its Lucene indexes in two
//! subdirectories. Each is inspected either by an external helper, when one
//! is configured and present on disk, or by a plain file listing.
//!
//! # Examples
//!
//! ```no_run
//! use maltcat_core::HelperConfig;
//! use maltcat_core::Inspector;
//! use maltcat_core::inspect_graph;
//!
//! let helper = HelperConfig::new("java")
//!     .classpath("lib/lucene-core.jar")
//!     .arg("LuceneExtractor");
//! let inspector = Inspector::new(Some(helper));
//!
//! for (name, result) in inspect_graph("Sample/Graphs/Graph1", &inspector) {
//!     println!("{name}: {result}");
//! }
//! ```

pub mod helper;
pub mod listing;
pub mod result;

use std::path::Path;

pub use helper::HelperInspector;
pub use helper::HelperUnavailable;
pub use listing::ListingInspector;
pub use listing::list_directory;
pub use result::InspectionResult;

use crate::HelperConfig;

/// Index subdirectories inspected under a graph root, in order.
pub const GRAPH_INDEX_DIRS: [&str; 2] = ["DataEntities", "StructureEntities"];

/// A way of looking inside an existing directory.
pub trait DirectoryInspector {
    /// Inspects `dir`, which is known to exist.
    ///
    /// Never fails: problems are reported as
    /// [`InspectionResult::Exception`].
    fn inspect(&self, dir: &Path) -> InspectionResult;

    /// Short description for diagnostics.
    fn describe(&self) -> String;
}

/// Picks the inspector for this run.
///
/// This is the only place helper availability is checked.
pub fn select_inspector(helper: Option<&HelperConfig>) -> Box<dyn DirectoryInspector> {
    let probed = helper.map_or(Err(HelperUnavailable::NotConfigured), |config| {
        config.probe().map(|program| (program, config.clone()))
    });

    match probed {
        Ok((program, config)) => Box::new(HelperInspector::new(program, config)),
        Err(reason) => Box::new(ListingInspector::new(reason.to_string())),
    }
}

/// Inspects directories, short-circuiting on missing ones.
pub struct Inspector {
    inner: Box<dyn DirectoryInspector>,
}

impl Inspector {
    /// Probes the helper once and keeps the selected inspector.
    #[must_use]
    pub fn new(helper: Option<HelperConfig>) -> Self {
        Self::with_inspector(select_inspector(helper.as_ref()))
    }

    /// Wraps an already chosen inspector.
    #[must_use]
    pub fn with_inspector(inner: Box<dyn DirectoryInspector>) -> Self {
        Self { inner }
    }

    /// Describes the inspector that will be used.
    #[must_use]
    pub fn describe(&self) -> String {
        self.inner.describe()
    }

    /// Inspects `dir`, returning [`InspectionResult::Absent`] without
    /// touching the inner inspector if nothing exists at that path.
    ///
    /// A file in place of the directory is passed on to the inner
    /// inspector.
    pub fn inspect(&self, dir: &Path) -> InspectionResult {
        if !dir.exists() {
            return InspectionResult::Absent;
        }
        self.inner.inspect(dir)
    }
}

impl std::fmt::Debug for Inspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("inner", &self.inner.describe())
            .finish()
    }
}

/// Inspects each of [`GRAPH_INDEX_DIRS`] under `graph_root`.
pub fn inspect_graph<P: AsRef<Path>>(
    graph_root: P,
    inspector: &Inspector,
) -> Vec<(String, InspectionResult)> {
    let graph_root = graph_root.as_ref();
    GRAPH_INDEX_DIRS
        .iter()
        .map(|name| ((*name).to_string(), inspector.inspect(&graph_root.join(name))))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct Counting {
        calls: Rc<Cell<usize>>,
    }

    impl DirectoryInspector for Counting {
        fn inspect(&self, _dir: &Path) -> InspectionResult {
            self.calls.set(self.calls.get() + 1);
            InspectionResult::Succeeded {
                stdout: String::new(),
            }
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[test]
    fn test_absent_directory_skips_inspector() {
        let temp = TempDir::new().unwrap();
        let calls = Rc::new(Cell::new(0));
        let inspector = Inspector::with_inspector(Box::new(Counting {
            calls: Rc::clone(&calls),
        }));

        let result = inspector.inspect(&temp.path().join("DataEntities"));
        assert_eq!(result, InspectionResult::Absent);
        assert_eq!(calls.get(), 0);

        inspector.inspect(temp.path());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_file_in_place_of_directory_is_not_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("DataEntities");
        fs::write(&path, b"not a directory").unwrap();

        let result = Inspector::new(None).inspect(&path);
        assert_eq!(result.kind(), "exception");
    }

    #[test]
    fn test_no_helper_selects_listing() {
        let inspector = Inspector::new(None);
        assert_eq!(inspector.describe(), "file listing (helper not configured)");
    }

    #[test]
    fn test_unavailable_helper_selects_listing() {
        let temp = TempDir::new().unwrap();
        let inspector = Inspector::new(Some(HelperConfig::new(temp.path().join("nope"))));
        assert!(inspector.describe().starts_with("file listing (helper program not found"));
    }

    #[test]
    fn test_inspect_graph_covers_both_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("DataEntities")).unwrap();
        fs::write(temp.path().join("DataEntities").join("segments_1"), b"").unwrap();

        let results = inspect_graph(temp.path(), &Inspector::new(None));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "DataEntities");
        assert!(matches!(
            &results[0].1,
            InspectionResult::Listed { names, .. } if names == &["segments_1".to_string()]
        ));
        assert_eq!(results[1].0, "StructureEntities");
        assert_eq!(results[1].1, InspectionResult::Absent);
    }
}
