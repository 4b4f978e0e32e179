//! Outcome of inspecting an index directory.

use std::fmt;

/// How a directory was inspected and what came out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionResult {
    /// The helper exited with status zero.
    Succeeded {
        /// Captured standard output.
        stdout: String,
    },

    /// The helper exited with a non-zero status.
    Failed {
        /// Exit code, `None` if the helper was terminated by a signal.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// The helper was unavailable; the directory's children were listed.
    Listed {
        /// Names of the immediate children, sorted.
        names: Vec<String>,
        /// Why the helper was not used.
        reason: String,
    },

    /// The directory does not exist.
    Absent,

    /// The helper could not be launched, or the directory could not be
    /// listed.
    Exception {
        /// Rendered error.
        message: String,
    },
}

impl InspectionResult {
    /// Short lowercase tag for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
            Self::Listed { .. } => "listed",
            Self::Absent => "absent",
            Self::Exception { .. } => "exception",
        }
    }

    /// Returns `true` if the helper failed or the directory could not be
    /// inspected at all.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Exception { .. })
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { stdout } => {
                write!(f, "helper succeeded ({} bytes of output)", stdout.len())
            }
            Self::Failed {
                exit_code: Some(code),
                ..
            } => write!(f, "helper failed with exit code {code}"),
            Self::Failed { exit_code: None, .. } => write!(f, "helper terminated by signal"),
            Self::Listed { names, .. } => write!(f, "{} files listed", names.len()),
            Self::Absent => write!(f, "directory not found"),
            Self::Exception { message } => write!(f, "inspection error: {message}"),
        }
    }
}
