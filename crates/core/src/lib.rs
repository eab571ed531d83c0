pub mod composer;
pub mod config;
pub mod parser;
pub mod renamer;
pub mod scanner;

pub use composer::{compose, RenameSpec};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RenameConfig,
};
pub use parser::{parse, ParseError, ParseResult, VIDEO_EXTENSIONS};
pub use renamer::{
    FailedFile, FsRenamer, RenameJob, RenameMode, RenameReport, RenamedFile, Renamer, RenamerError,
    SkippedFile,
};
pub use scanner::{extract_season_from_label, scan, Candidate};
