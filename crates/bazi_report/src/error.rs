//! Error types for report rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing report options, serializing, or writing reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Gender label is neither 男/male nor 女/female.
    #[error("unknown gender {0:?}; valid: 男/male, 女/female")]
    UnknownGender(String),
    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing an export file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
