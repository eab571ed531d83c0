//! Write-once manifest of original filenames.
//!
//! One line per original candidate filename, written before any renaming
//! happens in a directory. The manifest supports manual reversion; an
//! existing file at the target location is never overwritten.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::RenamerError;

/// Writes the manifest into `dir`, unless one already exists there.
///
/// Returns `true` when a manifest was written.
pub(super) fn write_manifest(
    dir: &Path,
    filename: &str,
    originals: &[String],
) -> Result<bool, RenamerError> {
    let path = dir.join(filename);
    if path.exists() {
        debug!(path = %path.display(), "manifest already present, not overwritten");
        return Ok(false);
    }

    let mut contents = originals.join("\n");
    contents.push('\n');
    fs::write(&path, contents).map_err(|source| RenamerError::ManifestWriteFailed {
        path: path.clone(),
        source,
    })?;

    Ok(true)
}
