use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use renamo_core::{
    load_config, validate_config, Config, FsRenamer, RenameJob, RenameMode, RenameReport,
    RenameSpec, Renamer,
};

/// Normalize release-style episode filenames to "Show Name - SxxExx.ext".
#[derive(Parser, Debug)]
#[command(name = "renamo", version, about)]
struct Args {
    /// Directory containing the episode files
    directory: PathBuf,

    /// Descend into subdirectories, deriving seasons from labels like "Season 2"
    #[arg(short, long)]
    recurse: bool,

    /// Replace the parsed show name for every file in the batch
    #[arg(long, value_name = "SHOW")]
    name: Option<String>,

    /// Season to use when the filename does not encode one
    #[arg(long, value_name = "N")]
    season: Option<String>,

    /// Create symbolic links to the originals instead of renaming them
    #[arg(short = 'l', long)]
    symlink: bool,

    /// Record the original filenames in a write-once manifest per directory
    #[arg(short = 's', long)]
    save_names: bool,

    /// Report what would happen without touching the file system
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    json: bool,

    /// Path to a TOML configuration file (falls back to $RENAMO_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var("RENAMO_CONFIG").ok().map(PathBuf::from));
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => Config::default(),
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    let mut spec = RenameSpec::default();
    if let Some(name) = &args.name {
        spec = spec.with_show_name(name.as_str());
    }
    if let Some(season) = &args.season {
        spec = spec.with_season_override(season.as_str());
    }

    let mode = if args.symlink || config.rename.use_symlinks {
        RenameMode::Symlink
    } else {
        RenameMode::InPlace
    };

    let job = RenameJob {
        directory: args.directory.clone(),
        recurse: args.recurse,
        spec,
        mode,
        save_manifest: args.save_names || config.rename.save_originals,
        dry_run: args.dry_run,
    };

    let renamer = FsRenamer::new(config.rename);
    let report = renamer
        .run(&job)
        .with_context(|| format!("Rename batch failed in {:?}", args.directory))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.dry_run);
    }

    Ok(())
}

fn print_report(report: &RenameReport, dry_run: bool) {
    let verb = if dry_run { "would rename" } else { "renamed" };
    for file in &report.renamed {
        println!("{verb}: {} -> {}", file.original.display(), file.new_name);
    }
    for file in &report.skipped {
        println!("skipped: {} ({})", file.path.display(), file.reason);
    }
    for file in &report.failed {
        println!("failed: {} ({})", file.path.display(), file.error);
    }
    println!(
        "{} renamed, {} skipped, {} failed, {} manifests written",
        report.renamed.len(),
        report.skipped.len(),
        report.failed.len(),
        report.manifests_written
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["renamo", "/tmp/shows"]);
        assert_eq!(args.directory, PathBuf::from("/tmp/shows"));
        assert!(!args.recurse);
        assert!(!args.symlink);
        assert!(!args.dry_run);
        assert!(args.name.is_none());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "renamo",
            "--name",
            "My Show",
            "--season",
            "2",
            "-rln",
            "/tmp/shows",
        ]);
        assert_eq!(args.name.as_deref(), Some("My Show"));
        assert_eq!(args.season.as_deref(), Some("2"));
        assert!(args.recurse);
        assert!(args.symlink);
        assert!(args.dry_run);
    }
}
