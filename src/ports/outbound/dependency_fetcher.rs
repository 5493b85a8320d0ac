use crate::lock_merge::domain::{DependencySpec, Lock};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A dependency added to the project and downloaded by the dependency manager
#[derive(Debug, Clone)]
pub struct FetchedDependency {
    /// Lock entry for the dependency, pinned to the revision that was checked out
    pub lock: Lock,
    /// Local cache checkout of the dependency, where its own lock file may live
    pub cache_dir: PathBuf,
}

impl FetchedDependency {
    pub fn new(lock: Lock, cache_dir: PathBuf) -> Self {
        Self { lock, cache_dir }
    }
}

/// DependencyFetcher port for the external "get" step
///
/// Implementations add the dependency to the project's declared dependencies,
/// download it and resolve the revision it is pinned to.
pub trait DependencyFetcher {
    /// Fetches `spec` into the project at `project_path`
    ///
    /// # Arguments
    /// * `project_path` - Project directory
    /// * `spec` - The requested dependency
    /// * `interactive` - Whether the dependency manager may prompt for a version
    ///
    /// # Errors
    /// Returns an error if the dependency cannot be added, downloaded or resolved
    fn fetch(
        &self,
        project_path: &Path,
        spec: &DependencySpec,
        interactive: bool,
    ) -> Result<FetchedDependency>;
}
