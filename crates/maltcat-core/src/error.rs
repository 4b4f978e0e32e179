//! Error types for catalog reading.

use thiserror::Error;

/// Result type alias using `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while reading an entity catalog from an archive.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed while opening the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable zip container.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// The bytes of an entry could not be read out of the archive.
    #[error("failed to read entry {entry}: {source}")]
    EntryRead {
        /// Archive entry name.
        entry: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Entry content is not UTF-8 text.
    #[error("entry is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Entry content is not a well-formed entity definition document.
    #[error("malformed entity definition: {0}")]
    MalformedXml(#[from] quick_xml::DeError),
}

impl CatalogError {
    /// Returns `true` if this error only affects a single archive entry.
    ///
    /// Recoverable errors are reported and the entry is skipped; the rest
    /// of the archive is still read. Anything else means the archive could
    /// not be opened at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use maltcat_core::CatalogError;
    ///
    /// let err = CatalogError::InvalidArchive("not a zip".to_string());
    /// assert!(!err.is_recoverable());
    ///
    /// let err = maltcat_core::parse_definition("<broken").unwrap_err();
    /// assert!(err.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EntryRead { .. } | Self::InvalidUtf8(_) | Self::MalformedXml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_errors_are_fatal() {
        let err = CatalogError::InvalidArchive("bad magic".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "invalid archive: bad magic");

        let err = CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_entry_errors_are_recoverable() {
        let err = CatalogError::EntryRead {
            entry: "Entities/Foo.entity".to_string(),
            source: std::io::Error::other("crc mismatch"),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Entities/Foo.entity"));

        let utf8 = String::from_utf8(vec![0xff, 0xfe]).map_err(CatalogError::from);
        assert!(utf8.is_err_and(|e| e.is_recoverable()));
    }
}
