use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::lock_merge::policies::DevImportBase;

/// Pin transitive dependencies of glide projects
#[derive(Parser, Debug)]
#[command(name = "lock-transitive")]
#[command(version)]
#[command(
    about = "Pin transitive dependencies by merging glide.lock files",
    long_about = None
)]
pub struct Args {
    /// Path to a lock-transitive.config.yml file
    /// (defaults to the one in the project directory, if any)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge an override lock file on top of a base lock file
    ///
    /// Entries from the override take precedence; subpackages are unioned.
    LockMerge(LockMergeArgs),

    /// Get a dependency and splice its lock file into this project's lock file
    Get(GetArgs),
}

#[derive(clap::Args, Debug)]
pub struct LockMergeArgs {
    /// Base lock file
    #[arg(short, long, value_name = "FILE")]
    pub base: PathBuf,

    /// Override lock file, whose entries take precedence
    #[arg(short = 'o', long = "override", value_name = "FILE")]
    pub override_lockfile: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: yaml or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Merge test imports against the merged imports table (legacy behavior)
    #[arg(long)]
    pub legacy_dev_lookup: bool,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dependency to get, e.g. github.com/tendermint/go-wire/data@v0.6.2
    #[arg(value_name = "DEPENDENCY")]
    pub dependency: String,

    /// Let glide prompt for the version to use
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Merge test imports against the merged imports table (legacy behavior)
    #[arg(long)]
    pub legacy_dev_lookup: bool,
}

/// The flag wins over the configured policy; `None` means neither was given
pub fn dev_import_base_flag(legacy_dev_lookup: bool) -> Option<DevImportBase> {
    legacy_dev_lookup.then_some(DevImportBase::Imports)
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
