use crate::lock_merge::policies::DevImportBase;
use std::path::PathBuf;

/// Default name of a project's lock file
pub const DEFAULT_LOCKFILE_NAME: &str = "glide.lock";

/// GetRequest - request DTO for fetching a dependency and splicing its lock file
#[derive(Debug, Clone)]
pub struct GetRequest {
    /// Project directory holding the lock file
    pub project_path: PathBuf,
    /// Dependency as typed by the user, e.g. `github.com/foo/bar@v1.2.0`
    pub dependency: String,
    /// Let the dependency manager prompt for the version
    pub interactive: bool,
    /// Lock file name inside the project and inside the dependency's checkout
    pub lockfile_name: String,
    /// Table override test imports are matched against
    pub dev_import_base: DevImportBase,
}

impl GetRequest {
    pub fn new(project_path: PathBuf, dependency: impl Into<String>, interactive: bool) -> Self {
        Self {
            project_path,
            dependency: dependency.into(),
            interactive,
            lockfile_name: DEFAULT_LOCKFILE_NAME.to_string(),
            dev_import_base: DevImportBase::default(),
        }
    }

    pub fn with_lockfile_name(mut self, lockfile_name: impl Into<String>) -> Self {
        self.lockfile_name = lockfile_name.into();
        self
    }

    pub fn with_dev_import_base(mut self, dev_import_base: DevImportBase) -> Self {
        self.dev_import_base = dev_import_base;
        self
    }

    /// Path of the project's lock file
    pub fn lockfile_path(&self) -> PathBuf {
        self.project_path.join(&self.lockfile_name)
    }
}
