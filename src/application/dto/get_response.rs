use crate::lock_merge::domain::{Lockfile, PackageName};
use std::path::PathBuf;

/// GetResponse - outcome of fetching a dependency and splicing its lock file
#[derive(Debug, Clone)]
pub struct GetResponse {
    /// Root package that was fetched
    pub dependency: PackageName,
    /// Revision the dependency was pinned to
    pub pin: String,
    /// Whether the dependency shipped its own lock file
    pub dependency_lockfile_found: bool,
    /// Lock file written to `lockfile_path`
    pub lockfile: Lockfile,
    pub lockfile_path: PathBuf,
}
