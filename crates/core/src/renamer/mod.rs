//! Renamer module - applies normalized names on the file system.
//!
//! Thin glue around the parser and composer: walks candidate files, renames
//! them in place or creates symbolic links, and records original names in a
//! write-once manifest. Per-file problems are collected into the report and
//! never abort the batch.

mod error;
mod fs_renamer;
mod manifest;
mod traits;
mod types;

pub use error::RenamerError;
pub use fs_renamer::FsRenamer;
pub use traits::Renamer;
pub use types::{FailedFile, RenameJob, RenameMode, RenameReport, RenamedFile, SkippedFile};
