use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub rename: RenameConfig,
}

/// Rename behavior defaults, overridable per run from the command line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameConfig {
    /// Name of the write-once manifest recording original filenames.
    #[serde(default = "default_manifest_filename")]
    pub manifest_filename: String,

    /// Create symbolic links instead of renaming in place.
    #[serde(default)]
    pub use_symlinks: bool,

    /// Record original names before renaming.
    #[serde(default)]
    pub save_originals: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            manifest_filename: default_manifest_filename(),
            use_symlinks: false,
            save_originals: false,
        }
    }
}

fn default_manifest_filename() -> String {
    "original_names.txt".to_string()
}
