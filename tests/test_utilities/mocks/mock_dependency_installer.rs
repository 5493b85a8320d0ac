use lock_transitive::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyInstaller recording the projects it installed
#[derive(Default, Clone)]
pub struct MockDependencyInstaller {
    pub installed: Arc<Mutex<Vec<PathBuf>>>,
    pub should_fail: bool,
}

impl MockDependencyInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn install_count(&self) -> usize {
        self.installed.lock().unwrap().len()
    }
}

impl DependencyInstaller for MockDependencyInstaller {
    fn install(&self, project_path: &Path) -> Result<()> {
        self.installed
            .lock()
            .unwrap()
            .push(project_path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock install failure");
        }
        Ok(())
    }
}
