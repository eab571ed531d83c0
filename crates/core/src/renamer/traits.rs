//! Trait definitions for the renamer module.

use super::error::RenamerError;
use super::types::{RenameJob, RenameReport};

/// A renamer that can apply normalized names to files on disk.
pub trait Renamer: Send + Sync {
    /// Returns the name of this renamer implementation.
    fn name(&self) -> &str;

    /// Runs a batch rename job and reports per-file outcomes.
    fn run(&self, job: &RenameJob) -> Result<RenameReport, RenamerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::RenameSpec;
    use crate::renamer::RenameMode;
    use std::path::PathBuf;

    struct MockRenamer;

    impl Renamer for MockRenamer {
        fn name(&self) -> &str {
            "mock"
        }

        fn run(&self, _job: &RenameJob) -> Result<RenameReport, RenamerError> {
            Ok(RenameReport::default())
        }
    }

    #[test]
    fn test_mock_renamer() {
        let renamer = MockRenamer;
        let job = RenameJob {
            directory: PathBuf::from("/tmp"),
            recurse: false,
            spec: RenameSpec::default(),
            mode: RenameMode::InPlace,
            save_manifest: false,
            dry_run: false,
        };

        let report = renamer.run(&job).unwrap();
        assert_eq!(report.total(), 0);
    }
}
