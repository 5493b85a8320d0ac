use crate::shared::Result;
use std::path::Path;

/// DependencyInstaller port for the external "install" step
pub trait DependencyInstaller {
    /// Materializes every dependency of the project's lock file locally
    fn install(&self, project_path: &Path) -> Result<()>;
}
