//! File system renamer implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

#[cfg(unix)]
use std::os::unix::fs::symlink;

#[cfg(windows)]
use std::os::windows::fs::symlink_file as symlink;

use crate::composer::{compose, RenameSpec};
use crate::config::RenameConfig;
use crate::parser::parse;
use crate::scanner::{scan, Candidate};

use super::error::RenamerError;
use super::manifest::write_manifest;
use super::traits::Renamer;
use super::types::{FailedFile, RenameJob, RenameMode, RenameReport, RenamedFile, SkippedFile};

/// Renamer that applies normalized names directly on the file system.
pub struct FsRenamer {
    config: RenameConfig,
}

impl FsRenamer {
    /// Creates a new file system renamer with the given configuration.
    pub fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    /// Creates a renamer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RenameConfig::default())
    }

    /// Processes a single candidate, recording the outcome in the report.
    fn process_file(
        &self,
        job: &RenameJob,
        dir: &Path,
        candidate: &Candidate,
        report: &mut RenameReport,
    ) {
        let Some(original_name) = candidate.path.file_name().and_then(|n| n.to_str()) else {
            report.skipped.push(SkippedFile {
                path: candidate.path.clone(),
                reason: "non UTF-8 filename".to_string(),
            });
            return;
        };

        let parsed = match parse(original_name) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(file = original_name, error = %err, "skipping unparseable filename");
                report.skipped.push(SkippedFile {
                    path: candidate.path.clone(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        let spec = effective_spec(&job.spec, candidate);
        let new_name = compose(&parsed, &spec);

        if new_name == original_name {
            report.skipped.push(SkippedFile {
                path: candidate.path.clone(),
                reason: "already normalized".to_string(),
            });
            return;
        }

        let destination = dir.join(&new_name);
        if destination.exists() {
            let err = RenamerError::DestinationExists { path: destination };
            report.failed.push(FailedFile {
                path: candidate.path.clone(),
                error: err.to_string(),
            });
            return;
        }

        if job.dry_run {
            report.renamed.push(RenamedFile {
                original: candidate.path.clone(),
                new_name,
            });
            return;
        }

        let outcome = match job.mode {
            RenameMode::InPlace => rename_in_place(&candidate.path, &destination),
            RenameMode::Symlink => link_normalized(original_name, &destination),
        };

        match outcome {
            Ok(()) => {
                info!(from = original_name, to = new_name.as_str(), "renamed");
                report.renamed.push(RenamedFile {
                    original: candidate.path.clone(),
                    new_name,
                });
            }
            Err(err) => {
                warn!(file = original_name, error = %err, "rename failed");
                report.failed.push(FailedFile {
                    path: candidate.path.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
}

impl Renamer for FsRenamer {
    fn name(&self) -> &str {
        "fs"
    }

    fn run(&self, job: &RenameJob) -> Result<RenameReport, RenamerError> {
        if !job.directory.is_dir() {
            return Err(RenamerError::DirectoryNotFound {
                path: job.directory.clone(),
            });
        }

        let candidates = scan(&job.directory, job.recurse);
        let by_directory = group_by_directory(candidates);

        let mut report = RenameReport::default();

        for (dir, files) in by_directory {
            if job.save_manifest && !job.dry_run {
                let originals: Vec<String> = files
                    .iter()
                    .filter_map(|c| c.path.file_name().and_then(|n| n.to_str()))
                    .map(str::to_string)
                    .collect();
                match write_manifest(&dir, &self.config.manifest_filename, &originals) {
                    Ok(true) => report.manifests_written += 1,
                    Ok(false) => {}
                    // A missing manifest only hurts manual reversion; the
                    // batch itself can still proceed.
                    Err(err) => warn!(error = %err, "manifest not written"),
                }
            }

            for candidate in &files {
                self.process_file(job, &dir, candidate, &mut report);
            }
        }

        info!(
            renamed = report.renamed.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "rename job finished"
        );
        Ok(report)
    }
}

/// In recurse mode a season derived from the enclosing directory label
/// replaces the batch-level override for files in that directory.
fn effective_spec(spec: &RenameSpec, candidate: &Candidate) -> RenameSpec {
    let mut spec = spec.clone();
    if let Some(season) = &candidate.derived_season {
        spec.season_override = Some(season.clone());
    }
    spec
}

fn group_by_directory(candidates: Vec<Candidate>) -> BTreeMap<PathBuf, Vec<Candidate>> {
    let mut by_directory: BTreeMap<PathBuf, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        let dir = candidate
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        by_directory.entry(dir).or_default().push(candidate);
    }
    by_directory
}

fn rename_in_place(source: &Path, destination: &Path) -> Result<(), RenamerError> {
    fs::rename(source, destination).map_err(|error| RenamerError::RenameFailed {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        error,
    })
}

/// Creates `destination` as a symbolic link pointing at the original file.
///
/// The link target is the bare original name, so the pair stays valid if
/// the enclosing directory is moved.
fn link_normalized(original_name: &str, destination: &Path) -> Result<(), RenamerError> {
    symlink(original_name, destination).map_err(|error| RenamerError::SymlinkFailed {
        link: destination.to_path_buf(),
        error,
    })
}
