//! Error types for the renamer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while applying normalized names.
///
/// Only job-level problems surface from [`Renamer::run`]; per-file failures
/// are stringified into the job's `RenameReport` so the batch continues.
///
/// [`Renamer::run`]: super::Renamer::run
#[derive(Debug, Error)]
pub enum RenamerError {
    /// Target directory does not exist or is not a directory.
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Destination filename already taken.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Failed to rename a file in place.
    #[error("Failed to rename {source} to {destination}")]
    RenameFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to create a symbolic link.
    #[error("Failed to create symlink {link}")]
    SymlinkFailed {
        link: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write the original-names manifest.
    #[error("Failed to write manifest: {path}")]
    ManifestWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
