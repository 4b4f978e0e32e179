//! Plain directory listing, used when the helper is unavailable.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::inspection::DirectoryInspector;
use crate::inspection::InspectionResult;

/// Lists the names of a directory's immediate children, sorted.
///
/// # Errors
///
/// Returns an error if `dir` is not a directory or cannot be read.
pub fn list_directory(dir: &Path) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(io::Error::other(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Fallback inspector that only lists file names.
#[derive(Debug, Clone)]
pub struct ListingInspector {
    reason: String,
}

impl ListingInspector {
    /// Creates a listing inspector, remembering why the helper is not used.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DirectoryInspector for ListingInspector {
    fn inspect(&self, dir: &Path) -> InspectionResult {
        match list_directory(dir) {
            Ok(names) => InspectionResult::Listed {
                names,
                reason: self.reason.clone(),
            },
            Err(e) => InspectionResult::Exception {
                message: format!("failed to list {}: {e}", dir.display()),
            },
        }
    }

    fn describe(&self) -> String {
        format!("file listing ({})", self.reason)
    }
}
