use lock_transitive::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LockfileWriter capturing what was written
#[derive(Default, Clone)]
pub struct MockLockfileWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, Lockfile)>>>,
    pub should_fail: bool,
}

impl MockLockfileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, Lockfile)> {
        self.written.lock().unwrap().clone()
    }
}

impl LockfileWriter for MockLockfileWriter {
    fn write_lockfile(&self, path: &Path, lockfile: &Lockfile) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile write failure");
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), lockfile.clone()));
        Ok(())
    }
}
