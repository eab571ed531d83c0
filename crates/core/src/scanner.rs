//! Directory scanning glue - finds candidate video files and derives
//! season labels from enclosing directories.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::warn;
use walkdir::WalkDir;

use crate::parser::has_video_extension;

/// A candidate file discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// Path of the file, rooted at the scan directory.
    pub path: PathBuf,
    /// Season derived from the immediate parent directory label, for files
    /// found below the root in recurse mode.
    pub derived_season: Option<String>,
}

// First digit run after a leading non-digit run, as in "Season 2". A label
// that starts with digits intentionally yields no season.
static SEASON_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D+(\d+)").expect("season label pattern compiles"));

/// Extract a season number from a directory label such as "Season 2".
pub fn extract_season_from_label(label: &str) -> Option<String> {
    SEASON_LABEL
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Scan `root` for candidate video files, in deterministic path order.
///
/// Non-recurse mode lists only files directly in `root`. Recurse mode walks
/// subdirectories and tags each file found below the root with a season
/// derived from its immediate parent directory label, when one can be
/// extracted. Unreadable entries are skipped with a warning; they never
/// abort the scan.
pub fn scan(root: &Path, recurse: bool) -> Vec<Candidate> {
    let max_depth = if recurse { usize::MAX } else { 1 };

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !has_video_extension(name) {
            continue;
        }

        let derived_season = entry
            .path()
            .parent()
            .filter(|parent| *parent != root)
            .and_then(|parent| parent.file_name())
            .and_then(|label| label.to_str())
            .and_then(extract_season_from_label);

        candidates.push(Candidate {
            path: entry.into_path(),
            derived_season,
        });
    }

    candidates.sort();
    candidates
}
