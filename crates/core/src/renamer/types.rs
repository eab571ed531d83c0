//! Types for the renamer module.

use serde::Serialize;
use std::path::PathBuf;

use crate::composer::RenameSpec;

/// A batch rename job over a single directory tree.
#[derive(Debug, Clone)]
pub struct RenameJob {
    /// Root directory containing the candidate files.
    pub directory: PathBuf,
    /// Whether to descend into subdirectories, deriving seasons from their
    /// labels.
    pub recurse: bool,
    /// Per-batch overrides passed to the composer.
    pub spec: RenameSpec,
    /// How normalized names are materialized.
    pub mode: RenameMode,
    /// Whether to record original names in a write-once manifest.
    pub save_manifest: bool,
    /// Compute the report without touching the file system.
    pub dry_run: bool,
}

/// How normalized names are materialized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameMode {
    /// Rename the file in place.
    InPlace,
    /// Leave the original untouched and create a symbolic link with the
    /// normalized name next to it.
    Symlink,
}

/// A file that received its normalized name.
#[derive(Debug, Clone, Serialize)]
pub struct RenamedFile {
    /// Original path of the file.
    pub original: PathBuf,
    /// Normalized filename it was given.
    pub new_name: String,
}

/// A file that was skipped without touching the file system.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// A file whose file-system operation failed.
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a batch rename job.
///
/// Per-file problems never abort the batch; they are collected here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    /// Files renamed (or linked, or slated for renaming in a dry run).
    pub renamed: Vec<RenamedFile>,
    /// Files left untouched: unparseable names, already-normalized names.
    pub skipped: Vec<SkippedFile>,
    /// Files whose rename or link operation failed.
    pub failed: Vec<FailedFile>,
    /// Number of manifests written by this job.
    pub manifests_written: usize,
}

impl RenameReport {
    /// Total number of candidate files seen by the job.
    pub fn total(&self) -> usize {
        self.renamed.len() + self.skipped.len() + self.failed.len()
    }
}
